pub mod movie_api_client;
