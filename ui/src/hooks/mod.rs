pub mod use_card_view;
