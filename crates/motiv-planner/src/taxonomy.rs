//! Fixed keyword taxonomy: category keywords, support words, and the ordered
//! subcategory tables used to refine a category once it has been chosen.
//!
//! All tables are compile-time constants. Keywords are lower-case and matched
//! as substrings of the lower-cased phrase, so `walk` also hits `walked`.

use motiv_core::Category;

/// One category's matching vocabulary.
#[derive(Debug)]
pub struct CategoryEntry {
    pub category: Category,
    /// Any of these contained in a phrase is evidence for the category.
    pub keywords: &'static [&'static str],
    /// Words that corroborate the category when a keyword already matched.
    pub support: &'static [&'static str],
    /// `(subcategory, keywords)`, scanned in order; first hit wins.
    pub subcategories: &'static [(&'static str, &'static [&'static str])],
}

/// Categories in iteration order. Ties during classification go to the
/// earlier entry.
pub static TAXONOMY: [CategoryEntry; 9] = [
    CategoryEntry {
        category: Category::Exercise,
        keywords: &[
            "walk", "run", "jog", "gym", "workout", "exercise", "bike", "biking", "cycling",
            "swim", "yoga", "pilates", "hike", "hiking", "lift", "weights", "cardio",
            "training", "stretch", "treadmill", "squat", "push-up", "pushup", "football",
            "soccer", "basketball", "tennis", "sport",
        ],
        support: &["calories", "sweat", "tired", "energy", "fitness", "health"],
        subcategories: &[
            (
                "cardio",
                &[
                    "run", "jog", "cycling", "bike", "biking", "swim", "cardio", "treadmill",
                    "sprint", "hiit",
                ],
            ),
            (
                "strength",
                &[
                    "gym", "weights", "lift", "strength", "squat", "push-up", "pushup",
                    "deadlift", "bench",
                ],
            ),
            ("flexibility", &["yoga", "stretch", "pilates", "mobility"]),
            (
                "sports",
                &[
                    "football", "soccer", "basketball", "tennis", "sport", "volleyball",
                    "badminton", "golf",
                ],
            ),
            ("walking", &["walk", "hike", "hiking", "stroll"]),
        ],
    },
    CategoryEntry {
        category: Category::Study,
        keywords: &[
            "study", "studied", "studying", "read", "learn", "research", "homework",
            "practice", "course", "lecture", "class", "exam", "revise", "revision", "library",
            "tutorial", "code", "coding", "programming",
        ],
        support: &["focus", "knowledge", "brain", "concentrat", "understand", "grades"],
        subcategories: &[
            (
                "programming",
                &["code", "coding", "programming", "leetcode", "debug", "algorithm"],
            ),
            ("reading", &["read", "book", "novel", "article", "chapter"]),
            ("exam_prep", &["exam", "revise", "revision", "flashcard", "quiz"]),
            ("research", &["research", "paper", "thesis"]),
            (
                "coursework",
                &["homework", "assignment", "lecture", "class", "course", "tutorial"],
            ),
            (
                "languages",
                &["language", "duolingo", "vocabulary", "spanish", "french"],
            ),
        ],
    },
    CategoryEntry {
        category: Category::Work,
        keywords: &[
            "work", "meeting", "project", "office", "job", "task", "email", "client", "report",
            "presentation", "deadline", "shift", "standup", "spreadsheet",
        ],
        support: &["productive", "boss", "career", "colleague", "team", "busy"],
        subcategories: &[
            ("meetings", &["meeting", "standup", "call", "interview", "sync"]),
            ("communication", &["email", "inbox", "slack", "message"]),
            (
                "deep_work",
                &["project", "report", "presentation", "deadline", "focus"],
            ),
            (
                "admin",
                &["task", "admin", "paperwork", "invoice", "spreadsheet"],
            ),
        ],
    },
    CategoryEntry {
        category: Category::Entertainment,
        keywords: &[
            "netflix", "tv", "movie", "film", "game", "gaming", "social media", "youtube",
            "tiktok", "instagram", "twitter", "reddit", "watch", "episode", "show", "series",
            "stream", "binge", "podcast", "music", "video", "anime",
        ],
        support: &["relax", "fun", "chill", "couch", "laugh", "bored"],
        subcategories: &[
            ("movies", &["movie", "film", "cinema"]),
            (
                "gaming",
                &["game", "gaming", "playstation", "xbox", "nintendo", "steam"],
            ),
            (
                "social_media",
                &[
                    "social media", "tiktok", "instagram", "twitter", "reddit", "facebook",
                    "scroll",
                ],
            ),
            ("music", &["music", "song", "podcast", "spotify", "album"]),
            (
                "streaming",
                &[
                    "netflix", "episode", "series", "show", "stream", "binge", "youtube", "hulu",
                    "tv", "watch", "anime", "video",
                ],
            ),
        ],
    },
    CategoryEntry {
        category: Category::Habits,
        keywords: &[
            "meditate", "journal", "clean", "cook", "meal prep", "water", "sleep", "slept",
            "nap", "shower", "laundry", "dishes", "chores", "groceries", "tidy", "vacuum",
            "breakfast", "skincare",
        ],
        support: &["routine", "daily", "habit", "healthy", "consistent"],
        subcategories: &[
            ("sleep", &["sleep", "slept", "nap"]),
            (
                "chores",
                &[
                    "clean", "laundry", "dishes", "chores", "tidy", "vacuum", "groceries",
                ],
            ),
            ("cooking", &["cook", "meal prep", "bake", "breakfast"]),
            ("hygiene", &["shower", "skincare", "brush"]),
            ("mindfulness", &["meditate", "journal"]),
            ("hydration", &["water"]),
        ],
    },
    CategoryEntry {
        category: Category::Social,
        keywords: &[
            "friend", "family", "party", "hangout", "hang out", "chat", "visit", "catch up",
            "drinks", "birthday", "date", "call", "brunch", "dinner with", "wedding",
        ],
        support: &["together", "laugh", "conversation", "people", "fun"],
        subcategories: &[
            (
                "friends",
                &["friend", "hangout", "hang out", "catch up", "drinks", "brunch"],
            ),
            (
                "family",
                &[
                    "family", "mom", "dad", "parents", "sister", "brother", "grandma", "kids",
                ],
            ),
            ("dating", &["date", "partner", "girlfriend", "boyfriend"]),
            ("events", &["party", "wedding", "birthday"]),
            ("calls", &["call", "chat", "facetime", "text"]),
        ],
    },
    CategoryEntry {
        category: Category::Creative,
        keywords: &[
            "paint", "draw", "sketch", "write", "writing", "wrote", "guitar", "piano",
            "singing", "compose", "craft", "knit", "photograph", "design", "blog", "poem",
            "dance", "pottery",
        ],
        support: &["inspired", "creative", "artistic", "imagination", "idea"],
        subcategories: &[
            (
                "art",
                &["paint", "draw", "sketch", "craft", "knit", "pottery", "design"],
            ),
            (
                "music",
                &["guitar", "piano", "singing", "compose", "drum", "violin"],
            ),
            (
                "writing",
                &["write", "writing", "wrote", "blog", "poem", "story"],
            ),
            ("photography", &["photograph", "photo", "camera"]),
            ("dance", &["dance"]),
        ],
    },
    CategoryEntry {
        category: Category::Wellness,
        keywords: &[
            "therapy", "massage", "spa", "relax", "self-care", "self care", "doctor",
            "checkup", "dentist", "breathing", "mindfulness", "sauna",
        ],
        support: &["calm", "peace", "stress", "mind", "recover", "rested"],
        subcategories: &[
            (
                "mental_health",
                &["therapy", "counsel", "mindfulness", "breathing"],
            ),
            ("recovery", &["massage", "spa", "sauna"]),
            (
                "medical",
                &["doctor", "checkup", "dentist", "medication"],
            ),
            ("relaxation", &["relax", "self-care", "self care"]),
        ],
    },
    CategoryEntry {
        category: Category::Travel,
        keywords: &[
            "drive", "drove", "commute", "flight", "fly", "flew", "train", "bus", "travel",
            "trip", "subway", "uber", "airport", "road trip",
        ],
        support: &["traffic", "road", "miles", "destination", "journey"],
        subcategories: &[
            ("commute", &["commute", "subway", "bus", "train", "uber"]),
            ("flight", &["flight", "fly", "flew", "airport", "plane"]),
            ("road_trip", &["road trip", "drive", "drove"]),
            ("trip", &["trip", "travel", "vacation"]),
        ],
    },
];
