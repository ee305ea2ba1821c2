mod dashboard;
mod fetch_feed;
mod import_status;
mod initdb;
mod serve;

pub use self::dashboard::run_dashboard;
pub use self::fetch_feed::fetch_feed;
pub use self::import_status::import_status;
pub use self::initdb::init_database;
pub use self::serve::serve;
