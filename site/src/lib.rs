// everything here is target-independent so that it can be tested on the host,
// the webapp crate handles the dom side of things
pub mod content;
pub mod motion;
pub mod section;
pub mod theme;
