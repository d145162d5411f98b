pub mod handle_add_movie;
pub mod handle_add_schedule;
pub mod handle_list_movies;
pub mod handle_search_movies;
pub mod handle_update_movie;
pub mod handle_update_schedule;
