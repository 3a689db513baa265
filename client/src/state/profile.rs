//! Content of the spotlight card.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

/// The employee being celebrated plus the page's static copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpotlightProfile {
    pub headline: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub photo_url: String,
    /// Shown when `photo_url` fails to load.
    pub fallback_photo_url: String,
    /// Decorative GIFs pinned above the comment list.
    pub celebration_images: Vec<CelebrationImage>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CelebrationImage {
    pub url: String,
    pub alt: String,
}

impl Default for SpotlightProfile {
    fn default() -> Self {
        let name = "Camille Davis";
        Self {
            headline: "Survey Says, She's 5 Stars!".to_owned(),
            name: name.to_owned(),
            title: "Customer Support Representative".to_owned(),
            description: "We're thrilled to celebrate Camille for achieving an average five-star rating on \
                          customer surveys over the past three months! Camille is known for her warm \
                          personality, patience, and genuine care for every guest. She consistently goes \
                          above and beyond to find solutions, ensuring each caller feels valued and respected."
                .to_owned(),
            photo_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=800&h=1200&fit=crop&crop=face&auto=format&q=90"
                .to_owned(),
            fallback_photo_url: placeholder_photo_url(name),
            celebration_images: vec![
                CelebrationImage {
                    url: "https://media.giphy.com/media/26u4cqiYI30juCOGY/giphy.gif".to_owned(),
                    alt: "Team celebration".to_owned(),
                },
                CelebrationImage {
                    url: "https://media.giphy.com/media/g9582DNuQppxC/giphy.gif".to_owned(),
                    alt: "Congratulations".to_owned(),
                },
            ],
        }
    }
}

/// Placeholder portrait with the name printed on it.
pub fn placeholder_photo_url(name: &str) -> String {
    let label = name.split_whitespace().collect::<Vec<_>>().join("+");
    format!("https://via.placeholder.com/600x800/4338ca/ffffff?text={label}")
}
