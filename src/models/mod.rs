pub mod section;
pub mod title;

pub use section::RecommendationSection;
pub use title::{ContentId, Title, TitleType};
