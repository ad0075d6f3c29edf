//! Tests for grid geometry enumeration
use glyph_grid::grid::{self, Element, ElementKind};
use glyph_grid::config::MAX_DIMENSION;
use glyph_grid::PatternDims;
use std::collections::HashSet;

fn formula(w: usize, h: usize) -> usize {
    (2 * w) * (2 * h) * 5 - 4 * (w + h) + 1
}

#[test]
fn test_element_count_matches_formula() {
    for w in 1..=6u32 {
        for h in 1..=6u32 {
            let dims = PatternDims::new(w, h).unwrap();
            let all = grid::generate(&dims);
            assert_eq!(
                all.len(),
                formula(w as usize, h as usize),
                "wrong count for {}x{}",
                w,
                h
            );
            assert_eq!(grid::element_count(&dims), all.len());
        }
    }
}

#[test]
fn test_elements_are_unique() {
    let dims = PatternDims::new(3, 2).unwrap();
    let all = grid::generate(&dims);
    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len());
}

#[test]
fn test_element_at_agrees_with_generate() {
    let dims = PatternDims::new(2, 3).unwrap();
    let all = grid::generate(&dims);
    for (i, element) in all.iter().enumerate() {
        assert_eq!(grid::element_at(&dims, i).as_ref(), Some(element));
    }
    assert_eq!(grid::element_at(&dims, all.len()), None);
}

#[test]
fn test_elements_stay_on_canvas() {
    let dims = PatternDims::new(2, 1).unwrap();
    let (cw, ch) = grid::canvas_size(&dims);
    for element in grid::elements(&dims) {
        let (left, top, right, bottom) = element.bounds();
        assert!(left >= 0 && top >= 0, "{} leaves the canvas", element);
        assert!(right <= cw as i32 && bottom <= ch as i32, "{} leaves the canvas", element);
    }
}

#[test]
fn test_dots_sit_on_interior_lattice_points() {
    let dims = PatternDims::new(1, 2).unwrap();
    let dots: Vec<Element> = grid::elements(&dims).filter(|e| e.is_dot()).collect();
    // x outer, y inner
    let centers: Vec<(i32, i32)> = dots
        .iter()
        .map(|e| match *e {
            Element::Dot { cx, cy, .. } => (cx, cy),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(centers, vec![(50, 50), (50, 100), (50, 150)]);
}

#[test]
fn test_no_boundary_edges() {
    let dims = PatternDims::new(2, 2).unwrap();
    for element in grid::elements(&dims) {
        if let Element::Line { kind, x1, y1, .. } = element {
            match kind {
                ElementKind::VerticalEdge => assert_ne!(x1, 0),
                ElementKind::HorizontalEdge => assert_ne!(y1, 0),
                _ => {}
            }
        }
    }
}

#[test]
fn test_largest_grid_stays_in_range() {
    let dims = PatternDims::new(MAX_DIMENSION, MAX_DIMENSION).unwrap();
    assert_eq!(grid::canvas_size(&dims), (25_600, 25_600));
    assert_eq!(grid::element_at(&dims, 0).map(|e| e.kind()), Some(ElementKind::ForwardDiagonal));

    let last = grid::elements(&dims).last().unwrap();
    assert_eq!(last, Element::Dot { cx: 25_550, cy: 25_550, r: grid::DOT_RADIUS });
    assert!(PatternDims::new(MAX_DIMENSION + 1, 1).is_err());
    assert!(PatternDims::new(u32::MAX, 1).is_err());
}
