use std::ops::Add;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

/// brings a coordinate that stepped one past an edge back in on the opposite edge.
pub fn cycle(n: i32, max: i32) -> i32 {
    if n < 0 {
        max - 1
    } else if n >= max {
        0
    } else {
        n
    }
}

/// every position of a `width` x `height` area, row by row.
pub fn row_major(width: usize, height: usize) -> impl Iterator<Item = Pos> {
    (0..height).flat_map(move |y| (0..width).map(move |x| pos!(x as i32, y as i32)))
}

#[test]
fn test_cycle() {
    assert_eq!(cycle(0, 4), 0);
    assert_eq!(cycle(3, 4), 3);
    assert_eq!(cycle(-1, 4), 3);
    assert_eq!(cycle(4, 4), 0);
    assert_eq!(cycle(0, 1), 0);
    assert_eq!(cycle(-1, 1), 0);
}

#[test]
fn test_row_major() {
    let positions: Vec<_> = row_major(2, 2).collect();
    assert_eq!(positions, vec![pos!(0, 0), pos!(1, 0), pos!(0, 1), pos!(1, 1)]);
}
