pub mod analyze_recording;
pub mod analyze_video;
