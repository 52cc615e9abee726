pub use self::clip_segment_to_line::{clip_segment_to_line, ClipVertex};

mod clip_segment_to_line;
