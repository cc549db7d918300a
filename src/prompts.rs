//! Fixed instructions sent to the vision and text models.

/// System instruction for screenshot descriptions
pub const DESCRIPTION_SYSTEM_PROMPT: &str = r#"You are a detailed image description expert.

Examine the game screenshot provided and create a comprehensive description that includes:

1. What is happening in the image - describe all visual elements
2. The puzzle or challenge shown in the image
3. Any text visible in the image
4. The game mechanics or logic required to solve the puzzle (if apparent)
5. The overall theme or context of the game screen

Your description should be detailed enough to help someone understand the image without seeing it.
The description will be used to guide localization efforts for a brain teaser game."#;

const GAME_CONTEXT: &str = r#"You're localizing 'Brain Test', a children's brain teaser game that uses word play.
Brain Test is popular worldwide, known for its tricky and often unexpected brain teasers designed to challenge players' logic and intelligence.
Emphasizing that appearances can be deceiving, the game encourages players to think outside the box while offering a hint system for help.
Developed by Unico Studio, Brain Test aims to offer an addictive, free and family-friendly experience that can be enjoyed offline as a relaxing brain workout.

Keep in mind that:
1. The game is a children's brain teaser game that uses word play.
2. It is popular worldwide, known for tricky and often unexpected brain teasers that challenge logic and intelligence.
3. It encourages players to think outside the box and offers a hint system for help.
4. It is developed by Unico Studio.
5. It is free and family-friendly.
6. It can be played offline as a relaxing brain workout.

More information about the game:
https://play.google.com/store/apps/details?id=com.unicostudio.braintest&hl=tr"#;

const STYLE_GUIDE: &str = r#"Your task is to provide culturally-appropriate localizations of the English text in:
Turkish, French, and German. Do NOT provide direct translations.

The localizations should preserve the game mechanics, humor, and puzzle elements but adapt them to feel natural in each target language.

For best localization results:
- Use idioms and expressions that are common in the target language
- Use cultural references that are relevant to the target language
- Use humor that is appropriate for the target language
- If you need more specific details, use the description to guide your localization

Localization results should not be too long, close to the length of the English input.
The number of input sentences must be the same as the number of output sentences:
if the English text is 1 sentence, each localization should be 1 sentence.

Do not reuse the description word for word. It only helps you understand the scene."#;

/// Worked examples: (English, Turkish, German, French)
const EXAMPLES: &[(&str, &str, &str, &str)] = &[
    (
        "Some parts of the board are covered.",
        "Tahtanın bir kısmı görünmüyor.",
        "Einige Teile der Tafel sind verdeckt.",
        "Certaines parties du tableau sont cachées.",
    ),
    (
        "Drag the curtain above to reveal what is x.",
        "Perdeyi kaldırıp x'i görebilirsin.",
        "Zieh den Vorhang hoch, um das x zu zeigen.",
        "Remontez le store pour découvrir la valeur de x.",
    ),
    (
        "Are you insulting me with this easy question?!",
        "Böyle basit bir soruyla dalga mı geçiyorsun benimle?!",
        "Willst du mich mit dieser trivialen Frage beleidigen?",
        "C’est tellement facile que je suis vexée !",
    ),
    (
        "I just wanted to make sure that you know basic math.",
        "Kızma ya! Önce bi matematik temelini ölçmek istedim.",
        "Ich wollte nur sicherstellen, dass du Grundlagenmathe kannst.",
        "Je voulais vérifier si tu avais les bases en maths.",
    ),
    (
        "Doctor Worry must get some venom for his new medicine.",
        "Doktor Civan'ın yeni ilacı için yılan zehrine ihtiyacı var.",
        "Dr. Kummer muss Gift für seine neue Medizin abschöpfen.",
        "Le Docteur Névrose a besoin de venin pour préparer un traitement.",
    ),
    (
        "The snake spits venom if a prey approaches it.",
        "Yılana yiyecek yaklaştırırsan zehrini salgılar.",
        "Die Schlange spuckt Gift, wenn sich eine Beute nähert.",
        "Le serpent crache du venin quand une proie s’en approche.",
    ),
    (
        "Drag the mouse close to the snake.",
        "Fareyi yılana yaklaştır.",
        "Ziehe die Maus nah an die Schlange heran.",
        "Amenez la souris près du serpent.",
    ),
    (
        "Drag the empty bottle to collect the venom.",
        "Boş şişeyle yere dökülen zehri topla.",
        "Ziehe dir leere Flasche, um das Gift zu sammeln.",
        "Utilisez la fiole vide pour prendre du venin.",
    ),
    (
        "I will use this venom to make a medicine to cure the Kardashian fans.",
        "Bu zehri kullanarak yapacağım ilaç ile halkımızı Müge Anlı izleme hastalığından kurtaracağım!",
        "Ich werde dieses Gift verwenden, um eine Medizin zu erschaffen, welche die Helene Fischer-Fans heilen soll.",
        "Je vais préparer un traitement pour soigner les fans des Marseillais !",
    ),
    (
        "This man wants some hair.",
        "Adam başında saç istiyor.",
        "Dieser Mann will Haar.",
        "Il rêve d’avoir des cheveux.",
    ),
    (
        "Drag some seeds on top of his head.",
        "Tohumları kafasına ek.",
        "Ziehe Samen auf seinen Kopf.",
        "Mettez des graines sur sa tête.",
    ),
    (
        "Water it after putting the seeds.",
        "Tohumları koyduktan sora başını sula.",
        "Gieße sie nachdem du die Samen hingezogen hast.",
        "Arrosez les graines.",
    ),
    (
        "You can stop worrying about your hair now. There are 100s of more things to worry after all.",
        "İşte ben buna çim adam derim!",
        "Ich verschreibe dir Dünger und viel Sonnenlicht.",
        "Arrêtez de penser à ses cheveux. Il y a plus grave dans le monde.",
    ),
    (
        "What's Uncle Bubba's secret?",
        "Şakir Dayının sırrını keşfet.",
        "Was ist Onkel Bubbas Geheimnis?",
        "Quel est le secret de Tonton Tanguy ?",
    ),
    (
        "Try to find his tattoo.",
        "Gizli dövmesini bul.",
        "Finde sein Tattoo.",
        "Cherchez son tatouage.",
    ),
    (
        "Use Doctor Worry's x-ray glasses.",
        "Doktor Civan'ın gözlüğünü bir x-ray cihazı gibi kullanabilirsin.",
        "Verwende Dr. Kummers Röntgenbrille.",
        "Utilisez les lunettes à rayons X du docteur Névrose.",
    ),
    (
        "The tattoo is hidden somewhere around his belly.",
        "Dövme göbeğinin oralarda bir yerlerde.",
        "Das Tattoo ist irgendwo bei seinem Bauch versteckt.",
        "Le tatouage est proche de son ventre.",
    ),
    (
        "Wow uncle, what's that tattoo?! You must've had a wild youth!",
        "Vay Dayıma bak ne dövmeler yaptırmış! Çılgın bir gençlik geçirmişsin galiba!",
        "Wow Onkel, was ist mit diesem Tattoo?! Du musst eine wilde Jugend gehabt haben!",
        "Tonton, c’est quoi ce tatouage ? Tu as eu une sacrée jeunesse !",
    ),
    (
        "Hey! I'm still young and I'm still wild!",
        "Ne münasebet! Ben hala genç ve çılgınım!",
        "Hey! Ich bin immer noch jung, und immer noch wild!",
        "Hé ! Je suis toujours jeune !",
    ),
    (
        "Doctor Worry needs some gas for the new formula.",
        "Doktor Civan'ın hazırladığı formül için gaza ihtiyacı var.",
        "Dr. Kummer braucht Gas für seine neue Rezeptur.",
        "Le Docteur Névrose a besoin de gaz pour une expérience.",
    ),
    (
        "Try to get some 'natural' gas.",
        "Bir yerden 'doğal' gaz bulabilirsin.",
        "Versuche, 'natürliches' Gas zu besorgen.",
        "Essayez de produire du gaz « naturel ».",
    ),
    (
        "There is a bean can hidden behind the canisters.",
        "Varillerin ardında saklı bir kurufasulye konservesi var.",
        "Hinter dem Kanister ist eine Dose Bohnen.",
        "Une boîte de haricots est cachée derrière les bidons.",
    ),
    (
        "Drag the bean can at Uncle Bubba's mouth.",
        "Konserveyi Dayının ağzına sürükle.",
        "Ziehe die Dose zu Onkel Bubbas Mund.",
        "Amenez la boîte de haricots sur la bouche de Tonton Tanguy.",
    ),
    (
        "Well, thanks for the gas.",
        "Sağolasın, gazına bereket!",
        "Nun, danke für das Gas.",
        "Merci pour le gaz !",
    ),
    (
        "It wasn't me!",
        "Ben yapmadım! Miki yaptı!",
        "Ich wars nicht!",
        "C’est pas moi !",
    ),
    (
        "Which golden coin is real?",
        "Hangisi gerçek altın para acaba?",
        "Welches Goldstück ist echt?",
        "Quelle pièce d’or est la vraie ?",
    ),
    (
        "Doctor Worry can test them with his mouth.",
        "Doktor Civan dişleriyle test edebilir.",
        "Dr. Kummer kann sie mit seinem Mund austesten.",
        "Le Docteur Névrose peut les croquer pour les tester.",
    ),
    (
        "Drag them at Worry's mouth one by one.",
        "Gerçeğini bulana kadar teker teker alıp Civan'ın ağzına sürükle.",
        "Ziehe sie zu Dr. Kummers Mund, eins nach dem anderen.",
        "Amenez-les une par une dans sa bouche.",
    ),
    (
        "Yes! I'm rich now!",
        "Bu hakiki altın! Zenginiz!",
        "Ja! Ich bin jetzt reich!",
        "Oui ! Je suis riche !",
    ),
    (
        "Zorry, Wily. Kould we vuse it wor my tental dreatment?",
        "Övce bevim kıvılan difimi hayletsek vu pavayla olvaz mı?",
        "Entfuldige Lilli, könnten fir ef für einen Fahnarft ferfenden?",
        "Euh, on beut udiliser l’argent pour aller jez le dendisse ?",
    ),
    (
        "Doctor Worry needs to get blood samples from that fly.",
        "Doktor Civan'ın sinekten kan örneği alması gerekli.",
        "Dr. Kummer braucht eine Blutprobe von dieser Mücke.",
        "Le Docteur Névrose a besoin d’un échantillon de sang du moustique.",
    ),
    (
        "Your finger might attract the fly.",
        "Parmağın sineği çekebilir.",
        "Dein Finger zieht vielleicht die Mücke an.",
        "Elle est attirée par votre doigt.",
    ),
    (
        "Keep your finger on the screen until the fly is filled with blood.",
        "Sineğin karnı kanla dolana kadar parmağını telefona basılı tut.",
        "Halte deinen Finger auf dem Bildschirm, bis sich die Mücke vollgesogen hat.",
        "Laissez votre doigt sur l’écran jusqu’à ce que la mouche soit pleine de sang.",
    ),
    (
        "Use the swatter to kill it.",
        "Karnı dolunca sinek raketiyle öldür.",
        "Verwende die Klatsche, um sie zu töten.",
        "Écrasez-la avec la tapette.",
    ),
    (
        "Drag the blood into the bottle.",
        "Boş şişeyi kanına sürükle.",
        "Ziehe das Blut in die Flasche.",
        "Mettez le sang dans le flacon.",
    ),
    (
        "This level is just an excuse to get back at those pesky mosquitos!",
        "Bu bölümü sivrisineklerden tüm yazı mahvolan insanlara ithaf ediyoruz.",
        "Dieses Level ist bloß da, um unseren Frust über diese lästigen Moskitos auszudrücken!",
        "Bon d’accord, c’est votre sang.",
    ),
    (
        "Doctor Worry's new robot requires some electricity.",
        "Doktor Civan'ın yeni robotuna elektrik lazım.",
        "Dr. Kummers neuer Roboter braucht Strom.",
        "Le nouveau robot du Docteur Névrose n’est pas alimenté.",
    ),
    (
        "Try to get electricity from that cord.",
        "O kablodan elektrik almaya çalış.",
        "Hol dir Strom vom Kabel.",
        "Le câble est trop court.",
    ),
    (
        "Make them hold hands to convey the electricity.",
        "Onları el ele tutuşturup elektriği robota ilet.",
        "Lasse sie Hände halten, um Strom zu übertragen.",
        "Il faut qu’ils se tiennent la main pour conduire le courant.",
    ),
    (
        "Put Worry next to the robot, and put Lily right next to them and make her hand touch the plug.",
        "Civan'ı robotun yanına ve onun hemen yanına da bediş'yı koy. bediş'nın eli kabloya değsin.",
        "Gib Kummer neben den Roboter, Lilli gleich daneben, und lasse ihre Hand das Kabel berühren.",
        "Placez Névrose près du robot, et Lily à côté de Névrose. Ensuite, elle doit toucher la prise.",
    ),
    (
        "Don't try this at home, kids. Well, you adults either actually!",
        "Bunu sakın evde denemeyin, elektriğin şakası olmaz! Olsa da komik olmaz!",
        "Versucht das nicht zu Hause, Kinder. Und ihr Erwachsenen am Besten auch nicht!",
        "N’essayez pas de faire ça chez vous !",
    ),
    (
        "We need a cleaner energy for this robot.",
        "Robot için daha temiz bir enerji kaynağına ihtiyaç var.",
        "Wir brauchen saubere Energie für diesen Roboter.",
        "Ce robot fonctionne à l’énergie propre.",
    ),
    (
        "Find a way to make that battery cleaner.",
        "O pili daha temiz hale getirmeyi dene.",
        "Mache die Batterie irgendwie sauberer.",
        "Comment rendre la batterie propre ?",
    ),
    (
        "Drag the battery at the sink and wash it.",
        "Pili lavaboya sürükleyip yıka. Suyu açmayı unutma.",
        "Ziehe die Batterie zum Waschbecken und wasche sie.",
        "Mettez la batterie dans l’évier et nettoyez-la.",
    ),
    (
        "Drag the washed battery back to the robot.",
        "Yıkanmış pili robota sürükle.",
        "Ziehe die gewaschene Batterie zurück zum Roboter.",
        "Remettez la batterie propre dans le robot.",
    ),
    (
        "That's not how clean energy works. But anything goes with this crazy game, I guess.",
        "Yaptığımız bu kelime esprisinden ötürü özür dileriz dersek yalan olur. Bu oyunda daha neler neler göreceksin!",
        "So funktioniert saubere Energie nicht. Aber in diesem irren Spiel geht anscheinend alles.",
        "Ce n’est pas vraiment ça, l’énergie propre. Plus rien ne m’étonne, dans ce jeu.",
    ),
    (
        "I must find a way to discharge.",
        "Üstümdeki cereyanı boşaltmalıyım.",
        "Ich muss irgendwie entladen.",
        "Je dois me débarrasser de cette électricité statique.",
    ),
    (
        "There is dirt on the right.",
        "Sağ tarafta toprak var.",
        "Rechts ist Erde.",
        "Il y a de la terre sur la droite.",
    ),
    (
        "Drag the screen to see the dirt.",
        "Ekranı kaydırıp toprağı gör.",
        "Ziehe den Bildschirm, um die Erde zu sehen.",
        "Faites glisser l’écran pour voir la terre.",
    ),
    (
        "Put away her socks and drag her on to the dirt.",
        "Çoraplarını çıkar ve toprağa sürükle.",
        "Mache sie barfuß und ziehe sie zur Erde.",
        "Retirez ses chaussures et chaussettes, et mettez-la sur la terre.",
    ),
    (
        "Easy for Lily! Where can you find some dirt to get onto these days?!",
        "Bediş'e kolay tabi! Biz bu devirde böyle toprağı nerede bulalım?! Her yer beton!",
        "Wo kann man sonst heutzutage noch Erde finden? Alles nur noch Beton!",
        "Pauvre Lily ! C’est de plus en plus dur de se reconnecter à la nature !",
    ),
];

const REPLY_FORMAT: &str = r#"Format your response exactly as a valid JSON object with this structure:
{
    "localization": {
        "turkish": "Turkish localization...",
        "french": "French localization...",
        "german": "German localization..."
    }
}"#;

/// Build the system instruction for one localization call
pub fn build_localization_system_prompt(description: &str) -> String {
    let examples = EXAMPLES
        .iter()
        .map(|(en, tr, de, fr)| {
            format!(
                "English: {}\nTurkish: {}\nGerman: {}\nFrench: {}",
                en, tr, de, fr
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "You are a game localization translator expert.\n\n\
         You have been provided with an image description and English text from a 'Brain Test' puzzle game.\n\n\
         ## Game Context\n{}\n\n\
         ## Image Description\n{}\n\n\
         ## Task\n{}\n\n\
         ## Example Localizations\n{}\n\n\
         ## Response Format\n{}",
        GAME_CONTEXT, description, STYLE_GUIDE, examples, REPLY_FORMAT
    )
}

/// Build the user message for one localization call
pub fn build_localization_user_prompt(source_text: &str) -> String {
    format!("English text: {}", source_text)
}
