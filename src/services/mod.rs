//! Algorithm and playback services operating on the graph model.

pub mod algorithm;
pub mod playback;
