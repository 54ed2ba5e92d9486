pub mod nav_check;
pub mod nav_resolve;
pub mod search_aggregate;
pub mod site_nav;
pub mod sitemap;
