use super::*;
use crate::figure::{regular_vertices, Figure, RegularPolygon};
use crate::io::TokenReader;
use crate::FigureError;
use crate::point::Point;
use std::f64::consts::PI;

type Tri = RegularPolygon<f64, 3>;
type Square = RegularPolygon<f64, 4>;

fn encode(points: &[Point<f64>]) -> String {
    points
        .iter()
        .map(|p| format!("{} {}", p.x(), p.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn unit_square_at(x: f64, y: f64) -> Square {
    Square::new(vec![
        Point::new(x, y),
        Point::new(x, y + 1.0),
        Point::new(x + 1.0, y + 1.0),
        Point::new(x + 1.0, y),
    ])
    .unwrap()
}

#[test]
fn with_len_starts_live_and_canonical() {
    let arr = FigureArray::<Tri>::with_len(3).unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.capacity(), 3);
    assert!(arr.iter().all(|t| *t == Tri::default()));
}

#[test]
fn with_len_refuses_unvalidated_canonical() {
    assert!(FigureArray::<RegularPolygon<f32, 1000>>::with_len(2).is_err());
    let hexes = FigureArray::filled(4, RegularPolygon::<f32, 6>::canonical().unwrap());
    assert_eq!(hexes.len(), 4);
    assert!((hexes.total_area() - 4.0 * 2.598_076).abs() < 1e-3);
}

#[test]
fn read_all_fills_every_slot() {
    let polys = [
        regular_vertices(3, Point::new(4.0, 4.0), 0.0, 3.3),
        regular_vertices(3, Point::new(1.5, 2.5), PI, 10.0),
        regular_vertices(3, Point::new(0.0, 0.0), PI / 2.0, 1.0),
    ];
    let text: String = polys.iter().map(|p| encode(p) + "\n").collect();
    let mut arr = FigureArray::<Tri>::with_len(3).unwrap();
    let outcome = arr.read_all(&mut TokenReader::from_text(&text));
    assert!(outcome.is_complete());
    assert_eq!(outcome.parsed, 3);
    for (fig, pts) in arr.iter().zip(&polys) {
        assert_eq!(fig.vertices(), pts.as_slice());
    }
    let sides = [3.3, 10.0, 1.0];
    let expected: f64 = sides.iter().map(|s| 3f64.sqrt() / 4.0 * s * s).sum();
    assert!((arr.total_area() - expected).abs() < 1e-9);
}

#[test]
fn read_all_truncates_at_first_rejection() {
    let good = regular_vertices(3, Point::new(4.0, 4.0), 0.0, 3.3);
    let third = regular_vertices(3, Point::new(5.0, 5.0), 0.0, 2.0);
    // Second record is two points short and bleeds into the third line.
    let text = format!("{}\n0 0 0 1\n{}\n", encode(&good), encode(&third));
    let mut arr = FigureArray::<Tri>::with_len(3).unwrap();
    let outcome = arr.read_all(&mut TokenReader::from_text(&text));
    assert_eq!(outcome.parsed, 1);
    assert_eq!(arr.len(), 1);
    assert!(outcome.failure.as_ref().is_some_and(FigureError::is_validation));
    assert_eq!(arr.get(0).unwrap().vertices(), good.as_slice());
    assert!(arr.get(1).is_none());
    assert_eq!(arr.capacity(), 3);
}

#[test]
fn read_all_reports_eof_as_partial() {
    let good = regular_vertices(3, Point::new(0.0, 0.0), 0.0, 1.0);
    let mut arr = FigureArray::<Tri>::with_len(2).unwrap();
    let outcome = arr.read_all(&mut TokenReader::from_text(&encode(&good)));
    assert_eq!(outcome.parsed, 1);
    assert!(matches!(outcome.failure, Some(FigureError::UnexpectedEof)));
}

#[test]
fn read_one_checks_bounds_and_keeps_state() {
    let mut arr = FigureArray::<Square>::with_len(2).unwrap();
    let err = arr
        .read_one(2, &mut TokenReader::from_text("0 0 0 1 1 1 1 0"))
        .unwrap_err();
    assert!(matches!(err, FigureError::IndexOutOfRange { index: 2, len: 2 }));

    let before = arr.get(1).unwrap().vertices().to_vec();
    assert!(arr
        .read_one(1, &mut TokenReader::from_text("0 0 0 1 1 1 2 0"))
        .is_err());
    assert_eq!(arr.get(1).unwrap().vertices(), before.as_slice());

    arr.read_one(1, &mut TokenReader::from_text("2 2 2 3 3 3 3 2"))
        .unwrap();
    assert_eq!(arr.get(1).unwrap().vertex_at(0).unwrap(), Point::new(2.0, 2.0));
}

#[test]
fn remove_shifts_tail_left() {
    let mut arr: FigureArray<Square> =
        [0.0, 10.0, 20.0].iter().map(|&x| unit_square_at(x, 0.0)).collect();
    arr.remove(1).unwrap();
    assert_eq!(arr.len(), 2);
    let anchors: Vec<_> = arr.iter().map(|s| s.vertex_at(0).unwrap()).collect();
    assert_eq!(anchors, vec![Point::new(0.0, 0.0), Point::new(20.0, 0.0)]);
    assert_eq!(arr.iter().count(), 2);
    assert!(arr.get(2).is_none());
}

#[test]
fn remove_out_of_range_is_rejected() {
    let mut arr: FigureArray<Square> = vec![unit_square_at(0.0, 0.0)].into_iter().collect();
    assert!(matches!(
        arr.remove(1),
        Err(FigureError::IndexOutOfRange { index: 1, len: 1 })
    ));
    arr.remove(0).unwrap();
    assert!(arr.is_empty());
    assert!(arr.remove(0).is_err());
}

#[test]
fn printing_is_index_prefixed() {
    let arr: FigureArray<Square> = vec![unit_square_at(0.0, 0.0), unit_square_at(2.0, 0.0)]
        .into_iter()
        .collect();
    let mut out = Vec::new();
    arr.print(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0: RegularPolygon(4): [ (0, 0), (0, 1), (1, 1), (1, 0) ]\n\
         1: RegularPolygon(4): [ (2, 0), (2, 1), (3, 1), (3, 0) ]\n"
    );
    let mut out = Vec::new();
    arr.print_centroids(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0: (0.5, 0.5)\n1: (2.5, 0.5)\n");
    let mut out = Vec::new();
    arr.print_areas(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("0: "));
    assert!((arr.total_area() - 2.0).abs() < 1e-9);
}

#[test]
fn borrowed_handles_reach_the_callers_figures() {
    let mut tri = Tri::with_placement(Point::new(4.0, 4.0), 0.0, 3.3).unwrap();
    let mut hex = RegularPolygon::<f64, 6>::with_placement(Point::new(4.0, 4.0), 0.0, 3.3).unwrap();
    let mut oct = RegularPolygon::<f64, 8>::with_placement(Point::new(4.0, 4.0), 0.0, 3.3).unwrap();
    let expected = tri.area() + hex.area() + oct.area();
    {
        let mut arr: FigureArray<&mut dyn Figure<Coord = f64>> =
            FigureArray::from_vec(vec![&mut tri as &mut dyn Figure<Coord = f64>, &mut hex, &mut oct]);
        assert!((arr.total_area() - expected).abs() < 1e-9);

        let mut out = Vec::new();
        arr.print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let labels: Vec<_> = text
            .lines()
            .map(|l| l.split(':').nth(1).unwrap().trim())
            .collect();
        assert_eq!(labels, ["Triangle", "Hexagon", "Octagon"]);

        let moved = regular_vertices(3, Point::new(-1.0, -1.0), 0.0, 2.0);
        arr.read_one(0, &mut TokenReader::from_text(&encode(&moved)))
            .unwrap();
        arr.remove(1).unwrap();
        assert_eq!(arr.get(1).unwrap().label(), "Octagon");
    }
    assert_eq!(tri.vertex_at(0).unwrap(), Point::new(-1.0, -1.0));
    assert_eq!(hex.vertex_count(), 6);
}

#[test]
fn boxed_figures_mix_shapes() {
    let figs: Vec<Box<dyn Figure<Coord = f64>>> = vec![
        Box::new(Tri::default()) as Box<dyn Figure<Coord = f64>>,
        Box::new(RegularPolygon::<f64, 6>::default()),
    ];
    let arr = FigureArray::from_vec(figs);
    let expected = 3f64.sqrt() / 4.0 + 3.0 * 3f64.sqrt() / 2.0;
    assert!((arr.total_area() - expected).abs() < 1e-9);
    assert!(!arr.get(0).unwrap().congruent_to(&**arr.get(1).unwrap()));
}
