pub mod a001_record;
pub mod a002_follower_record;
