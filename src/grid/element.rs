use std::fmt;

/// Kind of a grid element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    VerticalEdge,
    HorizontalEdge,
    /// Top-left to bottom-right
    ForwardDiagonal,
    /// Top-right to bottom-left
    BackwardDiagonal,
    Dot,
}

/// One addressable line segment or dot, in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Line {
        kind: ElementKind,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    Dot {
        cx: i32,
        cy: i32,
        r: i32,
    },
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Line { kind, .. } => *kind,
            Element::Dot { .. } => ElementKind::Dot,
        }
    }

    pub fn is_dot(&self) -> bool {
        matches!(self, Element::Dot { .. })
    }

    /// Bounding box as (left, top, right, bottom)
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        match *self {
            Element::Line { x1, y1, x2, y2, .. } => (x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)),
            Element::Dot { cx, cy, r } => (cx - r, cy - r, cx + r, cy + r),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::VerticalEdge => "vertical",
            ElementKind::HorizontalEdge => "horizontal",
            ElementKind::ForwardDiagonal => "diagonal \\",
            ElementKind::BackwardDiagonal => "diagonal /",
            ElementKind::Dot => "dot",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Line {
                kind,
                x1,
                y1,
                x2,
                y2,
            } => write!(f, "{} ({}, {}) -> ({}, {})", kind, x1, y1, x2, y2),
            Element::Dot { cx, cy, r } => write!(f, "dot ({}, {}) r={}", cx, cy, r),
        }
    }
}
