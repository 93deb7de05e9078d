mod rect_ops;

pub use rect_ops::{
    ceil_div, intersect, negative_offset, positive_offset, scale_down_expand, scale_up,
};
