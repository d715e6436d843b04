mod card;
mod notice_banner;
mod page_background;

pub use card::Card;
pub use notice_banner::NoticeBanner;
pub use page_background::PageBackground;
