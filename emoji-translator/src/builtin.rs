//! Built-in vocabulary
//!
//! Static tables the registry is seeded from. Phrase keys and word keys are
//! lowercase; the registry case-folds anything added later.

/// Multi-word idioms, in registry insertion order
pub const PHRASES: &[(&str, &str)] = &[
    // Time
    ("good morning", "🌅"),
    ("good night", "🌙"),
    ("have a good day", "☀️"),
    ("see you later", "👋"),
    ("see you tomorrow", "👋📅"),
    // Expressions
    ("on fire", "🔥"),
    ("fire station", "🚒"),
    ("break a leg", "🎭🍀"),
    ("piece of cake", "🍰"),
    ("it's raining cats and dogs", "🌧️🐱🐶"),
    ("spill the tea", "☕👀"),
    ("throw shade", "😎🌂"),
    ("catch some z's", "😴💤"),
    ("hit the hay", "🛏️"),
    ("burning the midnight oil", "🕯️🌙"),
    // Emotions and states
    ("over the moon", "🌙🤩"),
    ("on cloud nine", "☁️9️⃣"),
    ("feeling blue", "😢💙"),
    ("green with envy", "💚😒"),
    ("tickled pink", "💗😊"),
    ("seeing red", "😡🔴"),
    // Food
    ("cherry on top", "🍒"),
    ("cool as a cucumber", "😎🥒"),
    ("hot potato", "🔥🥔"),
    ("full of beans", "⚡🫘"),
    // Work
    ("touch base", "🤝"),
    ("circle back", "🔄"),
    ("low hanging fruit", "🍎👇"),
    ("move the needle", "📈"),
    ("think outside the box", "📦💡"),
    // General
    ("break the ice", "🧊🔨"),
    ("bite the bullet", "😬"),
    ("hit the nail on the head", "🔨🎯"),
    ("ball is in your court", "🎾"),
    ("cost an arm and a leg", "💸"),
];

/// Single words and their candidate emoji
pub const WORDS: &[(&str, &[&str])] = &[
    // Emotions
    ("happy", &["😊", "😄", "😁", "🙂"]),
    ("sad", &["😢", "😞", "😔", "☹️"]),
    ("angry", &["😠", "😡", "🤬", "💢"]),
    ("love", &["❤️", "😍", "💕", "🥰"]),
    ("excited", &["🤩", "🎉", "😆", "✨"]),
    ("tired", &["😴", "🥱", "😪", "💤"]),
    ("confused", &["😕", "🤔", "😵", "❓"]),
    ("surprised", &["😮", "😲", "🤯", "😯"]),
    ("laughing", &["😂", "🤣", "😆", "😹"]),
    ("crying", &["😭", "😢", "🥲", "💧"]),
    // Food and drinks
    ("coffee", &["☕", "🫖"]),
    ("tea", &["🍵", "🫖"]),
    ("beer", &["🍺", "🍻"]),
    ("wine", &["🍷", "🥂"]),
    ("pizza", &["🍕"]),
    ("burger", &["🍔", "🥪"]),
    ("sushi", &["🍣", "🍱"]),
    ("cake", &["🍰", "🎂"]),
    ("ice cream", &["🍦", "🍨"]),
    ("chocolate", &["🍫", "🍩"]),
    ("apple", &["🍎", "🍏"]),
    ("banana", &["🍌"]),
    ("bread", &["🍞", "🥖"]),
    ("cheese", &["🧀"]),
    ("pasta", &["🍝", "🍜"]),
    ("soup", &["🍲", "🥣"]),
    ("salad", &["🥗", "🥬"]),
    ("sandwich", &["🥪", "🌯"]),
    // Animals
    ("cat", &["🐱", "🐈", "😺"]),
    ("dog", &["🐶", "🐕", "🦮"]),
    ("bird", &["🐦", "🦜", "🕊️"]),
    ("fish", &["🐟", "🐠", "🎣"]),
    ("lion", &["🦁"]),
    ("tiger", &["🐯"]),
    ("elephant", &["🐘"]),
    ("monkey", &["🐒", "🐵"]),
    ("bear", &["🐻", "🧸"]),
    ("rabbit", &["🐰", "🐇"]),
    ("snake", &["🐍"]),
    ("frog", &["🐸"]),
    // Tech and work
    ("computer", &["💻", "🖥️"]),
    ("phone", &["📱", "☎️"]),
    ("email", &["📧", "✉️"]),
    ("internet", &["🌐", "📡"]),
    ("code", &["💻", "👨‍💻", "⌨️"]),
    ("programming", &["💻", "👩‍💻", "⌨️"]),
    ("data", &["📊", "📈", "💾"]),
    ("server", &["🖥️", "🗄️"]),
    ("bug", &["🐛", "🪲"]),
    ("meeting", &["🤝", "👥", "📅"]),
    ("presentation", &["📊", "📽️", "🎤"]),
    ("deadline", &["⏰", "📅", "⌛"]),
    ("project", &["📋", "📁", "🗂️"]),
    ("work", &["💼", "🛠️"]),
    ("team", &["👥", "🤝"]),
    ("client", &["🤝", "💼"]),
    ("report", &["📄", "📑"]),
    ("analysis", &["🔍", "📊"]),
    ("strategy", &["♟️", "🧭"]),
    ("goal", &["🎯", "🥅"]),
    ("target", &["🎯"]),
    ("growth", &["📈", "🌱"]),
    ("development", &["🛠️", "📈"]),
    ("time", &["⏰", "⌛"]),
    // Places and travel
    ("home", &["🏠", "🏡"]),
    ("office", &["🏢", "🏬"]),
    ("school", &["🏫", "🎒"]),
    ("hospital", &["🏥", "⚕️"]),
    ("airport", &["✈️", "🛫"]),
    ("beach", &["🏖️", "🌊"]),
    ("mountain", &["⛰️", "🏔️"]),
    ("city", &["🏙️", "🌆"]),
    ("park", &["🏞️", "🌳"]),
    ("restaurant", &["🍽️", "🍴"]),
    ("hotel", &["🏨", "🛎️"]),
    ("car", &["🚗", "🚙"]),
    ("train", &["🚆", "🚄"]),
    ("plane", &["✈️", "🛩️"]),
    // Time and weather
    ("morning", &["🌅", "☀️"]),
    ("afternoon", &["🌤️", "☀️"]),
    ("evening", &["🌆", "🌇"]),
    ("night", &["🌙", "🌃"]),
    ("today", &["📅", "🗓️"]),
    ("tomorrow", &["📆", "⏭️"]),
    ("yesterday", &["⏮️", "📅"]),
    ("sun", &["☀️", "🌞"]),
    ("moon", &["🌙", "🌕"]),
    ("rain", &["🌧️", "☔"]),
    ("snow", &["❄️", "☃️"]),
    ("wind", &["💨", "🌬️"]),
    ("storm", &["⛈️", "🌪️"]),
    // Activities and sports
    ("running", &["🏃", "🏃‍♀️", "👟"]),
    ("swimming", &["🏊", "🏊‍♀️", "🌊"]),
    ("cycling", &["🚴", "🚴‍♀️", "🚲"]),
    ("football", &["⚽", "🏈"]),
    ("basketball", &["🏀"]),
    ("tennis", &["🎾", "🏸"]),
    ("golf", &["⛳", "🏌️"]),
    ("music", &["🎵", "🎶", "🎧"]),
    ("dancing", &["💃", "🕺", "🪩"]),
    ("reading", &["📖", "📚", "🤓"]),
    ("writing", &["✍️", "📝", "🖊️"]),
    ("cooking", &["🍳", "👨‍🍳", "🥘"]),
    ("shopping", &["🛍️", "🛒", "💳"]),
    ("gaming", &["🎮", "🕹️", "👾"]),
    // Nature
    ("tree", &["🌳", "🌲"]),
    ("flower", &["🌸", "🌺", "🌻"]),
    ("grass", &["🌿", "🌱"]),
    ("ocean", &["🌊", "🐚"]),
    ("fire", &["🔥", "🚒"]),
    ("water", &["💧", "🌊"]),
    ("earth", &["🌍", "🌎", "🌏"]),
    ("star", &["⭐", "🌟", "✨"]),
    ("rainbow", &["🌈"]),
    // Objects
    ("book", &["📚", "📖", "📕"]),
    ("pen", &["🖊️", "✒️"]),
    ("pencil", &["✏️", "📝"]),
    ("clock", &["🕐", "⏰", "⏱️"]),
    ("calendar", &["📅", "📆"]),
    ("money", &["💰", "💵", "💸"]),
    ("gift", &["🎁", "🎀"]),
    ("key", &["🔑", "🗝️"]),
    ("lock", &["🔒", "🔐"]),
    ("camera", &["📷", "📸"]),
    ("light", &["💡", "🔦"]),
    ("mirror", &["🪞"]),
    ("scissors", &["✂️"]),
    ("hammer", &["🔨"]),
    // Miscellaneous
    ("party", &["🎉", "🥳", "🎊"]),
    ("birthday", &["🎂", "🎈", "🎁"]),
    ("wedding", &["💒", "💍", "👰"]),
    ("graduation", &["🎓", "📜"]),
    ("vacation", &["🏖️", "✈️", "🌴"]),
    ("sleep", &["😴", "💤", "🛌"]),
    ("dream", &["💭", "🌠", "😌"]),
    ("magic", &["✨", "🪄", "🔮"]),
    ("luck", &["🍀", "🎲", "🤞"]),
    ("success", &["🏆", "🎯", "✅"]),
    ("failure", &["❌", "💥", "📉"]),
    ("help", &["🆘", "🙋", "🤝"]),
    ("question", &["❓", "🤔", "🙋"]),
    ("answer", &["💡", "✅", "🗣️"]),
];

/// Words eligible for replacement under the professional style
pub const PROFESSIONAL_WORDS: &[&str] = &[
    "meeting",
    "project",
    "deadline",
    "presentation",
    "data",
    "computer",
    "email",
    "office",
    "work",
    "team",
    "client",
    "report",
    "analysis",
    "strategy",
    "goal",
    "target",
    "success",
    "growth",
    "development",
    "today",
    "tomorrow",
    "time",
];

/// Context cues, matched as substrings of the lowercased text
pub const DAYTIME_CUES: &[&str] = &["morning", "dawn", "sunrise"];
pub const NIGHTTIME_CUES: &[&str] = &["night", "evening", "dark"];
pub const LITERAL_FIRE_CUES: &[&str] = &["on fire", "burning", "hot", "flame"];
pub const FIRE_SERVICE_CUES: &[&str] = &["station", "truck", "department", "fighter"];

/// Variant subsets chosen when a context cue is present
pub const DAYTIME_VARIANTS: &[&str] = &["☀️", "🌅"];
pub const NIGHTTIME_VARIANTS: &[&str] = &["🌙", "🌃"];
pub const LITERAL_FIRE_VARIANTS: &[&str] = &["🔥"];
pub const FIRE_SERVICE_VARIANTS: &[&str] = &["🚒", "👨‍🚒"];

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "great",
    "awesome",
    "amazing",
    "wonderful",
    "fantastic",
    "excellent",
    "perfect",
    "love",
    "happy",
    "excited",
    "best",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "hate",
    "sad",
    "angry",
    "frustrated",
    "disappointed",
    "worst",
    "fail",
    "problem",
];

pub const POSITIVE_EMOJI: &[&str] = &["😊", "😄", "🥳", "👍", "✨"];
pub const NEGATIVE_EMOJI: &[&str] = &["😞", "😢", "😠", "👎", "💔"];
pub const NEUTRAL_EMOJI: &[&str] = &["😐", "🤔", "🙂", "😶"];
