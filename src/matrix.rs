// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Default)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    // row-major iteration over every square.
    pub fn squares(&self) -> impl Iterator<Item = (i8, i8)> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }
}

// unit step along a lane. across plays move right, down plays move down.
#[derive(Clone, Copy)]
pub struct Step {
    pub dr: i8,
    pub dc: i8,
}

impl Step {
    pub const LEFT: Step = Step { dr: 0, dc: -1 };
    pub const RIGHT: Step = Step { dr: 0, dc: 1 };
    pub const UP: Step = Step { dr: -1, dc: 0 };
    pub const DOWN: Step = Step { dr: 1, dc: 0 };

    #[inline(always)]
    pub fn along(down: bool) -> (Step, Step) {
        if down {
            (Step::UP, Step::DOWN)
        } else {
            (Step::LEFT, Step::RIGHT)
        }
    }

    #[inline(always)]
    pub fn apply(&self, row: i8, col: i8, times: i8) -> (i8, i8) {
        (row + self.dr * times, col + self.dc * times)
    }
}
