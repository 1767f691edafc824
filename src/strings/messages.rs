//! # Messages
//!
//! The bot's replies. Pools are picked from uniformly at random.

pub const SELF_PARADOX: &str = "No, I'm dad!";

pub fn dad_greeting(name: &str) -> String {
    format!("Hi {name}, I'm Dad!")
}

pub fn pause_ack(word: &str) -> String {
    format!("Be back in 20, gonna go grab some {word}")
}

pub const WIN_LOSE_GIF: &str = "https://tenor.com/view/are-ya-winning-son-gif-18099517";

pub const GOODNIGHT_POOL: [&str; 6] = [
    "Goodnight Snore-osaurus Rex.",
    "Goodnight? I’ll try… but I’ve been practicing for the greatnight.",
    "Goodnight! Sleep tight!",
    "Goodnight? Careful… last time I went to bed early, I woke up in tomorrow.",
    "Goodnight! Don’t let the bedbugs byte… they’re terrible at debugging.",
    "Don't forget to brush your teeth",
];

pub const THERMOSTAT_POOL: [&str; 2] = [
    "Don't touch that thermostat!",
    "Don't touch the thermostat! You don't pay the bills around here!",
];

pub const BUDGET_LINE: &str =
    "Every dollar not spent on genetically engineering cat girls is a dollar wasted.";

pub const JOKE_FALLBACK: &str = "Gosh dang joke AI always breakin. Tell Clutch to fix it.";
