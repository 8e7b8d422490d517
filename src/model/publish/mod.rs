pub mod publish_target;
