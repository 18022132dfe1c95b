pub mod suggest_videos;
