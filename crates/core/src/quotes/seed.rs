//! Seed data: the quote collection compiled into the binary.

use super::model::Quote;

fn quote(id: &str, text: &str, author: &str, tags: &[&str]) -> Quote {
    Quote {
        id: id.to_string(),
        text: text.to_string(),
        author: author.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The full seeded collection, in canonical order.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        quote(
            "1",
            "The greatest glory in living lies not in never falling, but in rising every time we fall.",
            "Nelson Mandela",
            &["inspiration", "life"],
        ),
        quote(
            "2",
            "The way to get started is to quit talking and begin doing.",
            "Walt Disney",
            &["motivation", "success"],
        ),
        quote(
            "3",
            "Your time is limited, so don't waste it living someone else's life.",
            "Steve Jobs",
            &["life", "time"],
        ),
        quote(
            "4",
            "If life were predictable it would cease to be life, and be without flavor.",
            "Eleanor Roosevelt",
            &["life", "wisdom"],
        ),
        quote(
            "5",
            "If you set your goals ridiculously high and it's a failure, you will fail above everyone else's success.",
            "James Cameron",
            &["goals", "success"],
        ),
        quote(
            "6",
            "Life is what happens when you're busy making other plans.",
            "John Lennon",
            &["life", "wisdom"],
        ),
        quote(
            "7",
            "Spread love everywhere you go. Let no one ever come to you without leaving happier.",
            "Mother Teresa",
            &["love", "kindness"],
        ),
        quote(
            "8",
            "When you reach the end of your rope, tie a knot in it and hang on.",
            "Franklin D. Roosevelt",
            &["perseverance", "motivation"],
        ),
        quote(
            "9",
            "Always remember that you are absolutely unique. Just like everyone else.",
            "Margaret Mead",
            &["humor", "individuality"],
        ),
        quote(
            "10",
            "Don't judge each day by the harvest you reap but by the seeds that you plant.",
            "Robert Louis Stevenson",
            &["wisdom", "life"],
        ),
    ]
}
