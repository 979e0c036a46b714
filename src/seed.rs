use crate::store::{AlphabetContent, GrammarContent, LessonContent, NewLesson};

const CONSONANTS: &[(&str, &str)] = &[
    ("క", "ka"),
    ("ఖ", "kha"),
    ("గ", "ga"),
    ("ఘ", "gha"),
    ("ఙ", "nga"),
    ("చ", "ca"),
    ("ఛ", "cha"),
    ("జ", "ja"),
    ("ఝ", "jha"),
    ("ఞ", "nya"),
    ("ట", "ta"),
    ("ఠ", "tha"),
    ("డ", "da"),
    ("ఢ", "dha"),
    ("ణ", "na"),
    ("త", "ta"),
    ("థ", "tha"),
    ("ద", "da"),
    ("ధ", "dha"),
    ("న", "na"),
    ("ప", "pa"),
    ("ఫ", "pha"),
    ("బ", "ba"),
    ("భ", "bha"),
    ("మ", "ma"),
    ("య", "ya"),
    ("ర", "ra"),
    ("ల", "la"),
    ("వ", "va"),
    ("శ", "sa"),
    ("ష", "sha"),
    ("స", "sa"),
    ("హ", "ha"),
    ("ళ", "la"),
    ("క్ష", "ksha"),
];

const VOWELS: &[(&str, &str)] = &[
    ("అ", "a"),
    ("ఆ", "aa"),
    ("ఇ", "i"),
    ("ఈ", "ee"),
    ("ఉ", "u"),
    ("ఊ", "oo"),
    ("ఋ", "ru"),
    ("ౠ", "ruu"),
    ("ఎ", "e"),
    ("ఏ", "ee"),
    ("ఐ", "ai"),
    ("ఒ", "o"),
    ("ఓ", "oo"),
    ("ఔ", "au"),
    ("అం", "am"),
    ("అః", "aha"),
];

const SENTENCE_RULES: &[&str] = &[
    "Telugu follows Subject-Object-Verb (SOV) word order",
    "Subject (కర్త) comes first: నేను (I), నువ్వు (you), అతను (he)",
    "Object (కర్మ) comes second: పుస్తకం (book), ఆపిల్ (apple)",
    "Verb (క్రియ) comes last: చదువుతున్నాను (reading), తింటున్నాను (eating)",
    "Time expressions usually come at the beginning",
];

const SENTENCE_EXAMPLES: &[&str] = &[
    "నేను పుస్తకం చదువుతున్నాను - I am reading a book",
    "అతను ఆపిల్ తింటున్నాడు - He is eating an apple",
    "నిన్న నేను సినిమా చూశాను - Yesterday I watched a movie",
    "నువ్వు బడికి వెళ్తున్నావు - You are going to school",
    "ఆమె టీవీ చూస్తోంది - She is watching TV",
];

/// The built-in lesson catalog, in id order.
pub fn seed_lessons() -> Vec<NewLesson> {
    vec![
        NewLesson {
            title: "Telugu Alphabet - Overview".to_string(),
            content: LessonContent::Alphabet(alphabet(CONSONANTS)),
            order: 1,
            audio_url: Some("/audio/alphabet.mp3".to_string()),
        },
        NewLesson {
            title: "Telugu Vowels".to_string(),
            content: LessonContent::Alphabet(alphabet(VOWELS)),
            order: 2,
            audio_url: Some("/audio/vowels.mp3".to_string()),
        },
        NewLesson {
            title: "Basic Grammar - Sentence Construction".to_string(),
            content: LessonContent::Grammar(GrammarContent {
                rules: to_strings(SENTENCE_RULES),
                examples: to_strings(SENTENCE_EXAMPLES),
            }),
            order: 3,
            audio_url: Some("/audio/grammar.mp3".to_string()),
        },
    ]
}

fn alphabet(pairs: &[(&str, &str)]) -> AlphabetContent {
    let (characters, descriptions) = pairs
        .iter()
        .map(|(character, description)| (character.to_string(), description.to_string()))
        .unzip();
    AlphabetContent {
        characters,
        descriptions,
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
