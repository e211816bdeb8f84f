/// Integer pixel position. `y` counts buffer rows, row 0 being the bottom of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
