//! Words a listener (or an ASR model) cannot tell apart by sound.
//!
//! Every entry is written in normalized form: lowercase, no punctuation,
//! contractions already expanded (`they're` is `they are`). ASR output often
//! drops apostrophes, so the bare spellings (`theyre`) are listed as well.

pub(super) const HOMOPHONE_GROUPS: &[&[&str]] = &[
    // Contractions and their sound-alikes
    &["their", "there", "theyre", "they are"],
    &["your", "youre", "you are", "yore"],
    &["were", "we are", "whirr"],
    &["its", "it", "it is"],
    &["whose", "whos", "who is"],
    &["aisle", "isle", "i will"],
    &["heel", "heal", "he will"],
    &["wheel", "we will"],
    &["yule", "you will"],
    &["eyed", "i would"],
    &["weed", "we would"],
    &["lets", "let us"],
    &["that", "thats"],
    &["what", "whats"],
    // Contractions ASR writes without the apostrophe
    &["do not", "dont"],
    &["does not", "doesnt"],
    &["did not", "didnt"],
    &["ca not", "cant", "can not", "cannot"],
    &["wo not", "wont", "will not"],
    &["is not", "isnt"],
    &["are not", "arent"],
    &["was not", "wasnt"],
    &["were not", "werent"],
    &["has not", "hasnt"],
    &["have not", "havent"],
    &["had not", "hadnt"],
    &["could not", "couldnt"],
    &["would not", "wouldnt"],
    &["should not", "shouldnt"],
    &["must not", "mustnt"],
    &["i am", "im"],
    &["i have", "ive"],
    &["you have", "youve"],
    &["we have", "weve"],
    &["they have", "theyve"],
    &["i will", "ill"],
    &["you will", "youll"],
    &["they will", "theyll"],
    &["it will", "itll"],
    &["i would", "id"],
    &["you would", "youd"],
    &["they would", "theyd"],
    // Function words
    &["to", "too", "two"],
    &["for", "four", "fore"],
    &["by", "buy", "bye"],
    &["no", "know"],
    &["knew", "new", "gnu"],
    &["one", "won"],
    &["ate", "eight"],
    &["hour", "our"],
    &["which", "witch"],
    &["whether", "weather"],
    &["wood", "would"],
    &["where", "wear", "ware"],
    &["oh", "owe"],
    &["or", "oar", "ore"],
    &["eye", "i"],
    &["be", "bee"],
    &["in", "inn"],
    &["not", "knot"],
    &["some", "sum"],
    &["dew", "do", "due"],
    &["ewe", "you"],
    &["hi", "high"],
    &["hay", "hey"],
    // Content words
    &["right", "write", "rite"],
    &["hear", "here"],
    &["see", "sea"],
    &["blue", "blew"],
    &["flower", "flour"],
    &["son", "sun"],
    &["meet", "meat"],
    &["week", "weak"],
    &["wait", "weight"],
    &["road", "rode", "rowed"],
    &["read", "red"],
    &["read", "reed"],
    &["hole", "whole"],
    &["pair", "pear", "pare"],
    &["plain", "plane"],
    &["tail", "tale"],
    &["sale", "sail"],
    &["mail", "male"],
    &["piece", "peace"],
    &["rain", "reign", "rein"],
    &["knight", "night"],
    &["knows", "nose"],
    &["sew", "sow"],
    &["sent", "cent", "scent"],
    &["deer", "dear"],
    &["bare", "bear"],
    &["break", "brake"],
    &["cell", "sell"],
    &["die", "dye"],
    &["fair", "fare"],
    &["flew", "flu", "flue"],
    &["hair", "hare"],
    &["heard", "herd"],
    &["him", "hymn"],
    &["made", "maid"],
    &["pail", "pale"],
    &["poor", "pour", "pore"],
    &["stair", "stare"],
    &["steal", "steel"],
    &["threw", "through"],
    &["toe", "tow"],
    &["way", "weigh"],
    &["ant", "aunt"],
    &["berry", "bury"],
    &["ball", "bawl"],
    &["board", "bored"],
    &["allowed", "aloud"],
    &["groan", "grown"],
    &["guessed", "guest"],
    &["missed", "mist"],
    &["passed", "past"],
    &["patience", "patients"],
    &["principal", "principle"],
    &["role", "roll"],
    &["seen", "scene"],
    &["tide", "tied"],
    &["waste", "waist"],
    &["course", "coarse"],
    &["doe", "dough"],
    &["fir", "fur"],
    &["lead", "led"],
    &["muscle", "mussel"],
    &["prey", "pray"],
    &["wail", "whale"],
    &["whine", "wine"],
    &["yolk", "yoke"],
    &["throne", "thrown"],
    &["chews", "choose"],
    &["close", "clothes"],
    &["flea", "flee"],
    &["knead", "need"],
    &["loan", "lone"],
    &["none", "nun"],
    &["peak", "peek"],
    &["real", "reel"],
    &["sole", "soul"],
    &["stake", "steak"],
    &["suite", "sweet"],
    &["tea", "tee"],
    // Abbreviations read aloud
    &["mr", "mister"],
    &["mrs", "missus", "misses"],
    &["dr", "doctor"],
    &["ok", "okay"],
    // Names ASR spells inconsistently
    &["ann", "anne", "an"],
    &["jon", "john"],
    &["sara", "sarah"],
    &["kathy", "cathy"],
    &["steven", "stephen"],
    &["katie", "katy"],
    &["jeff", "geoff"],
    &["aaron", "erin"],
    &["alan", "allen", "allan"],
    &["sean", "shawn", "shaun"],
    &["carl", "karl"],
    &["eric", "erik"],
    &["mark", "marc"],
    &["zack", "zach", "zak"],
    &["lily", "lilly"],
    &["megan", "meghan"],
];
