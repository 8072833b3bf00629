pub mod info_card;
pub mod nav;
