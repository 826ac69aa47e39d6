//! Examples section: nested topic router.
//!
//! Components:
//! - [`TopicGallery`] - Router switching between the card gallery and a topic
//! - [`TopicCard`] - One selectable topic card

mod card;
#[allow(clippy::module_inception)]
mod gallery;

pub use card::TopicCard;
pub use gallery::TopicGallery;
