pub mod handle_top_movies;
