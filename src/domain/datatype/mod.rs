pub mod beer_style;
