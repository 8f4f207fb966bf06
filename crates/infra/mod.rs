pub mod cms;
pub mod db;
