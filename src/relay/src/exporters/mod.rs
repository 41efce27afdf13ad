pub mod flume_forward;
