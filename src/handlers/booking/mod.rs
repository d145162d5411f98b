pub mod handle_buy_ticket;
