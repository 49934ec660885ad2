pub mod frontier_queue;
pub mod search_record;
