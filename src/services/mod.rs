pub mod redirects;
