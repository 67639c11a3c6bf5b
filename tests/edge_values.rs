//! Value accessors and write-through across edge and vertex shapes.

use std::collections::{LinkedList, VecDeque};

use adjacent::shape::{classify, id_of};
use adjacent::{
    edge_address, edge_element, edge_value, edge_value_mut, edge_value_mut_at, edges, find_vertex,
    find_vertex_edge, target_id, vertex_value, vertex_value_mut, vertices, EdgeShape, ShapeKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Blue,
}

#[test]
fn tuple_edges_expose_property_bundle() {
    let mut g: Vec<Vec<(usize, f64, Color)>> = vec![vec![(1, 2.5, Color::Red)], vec![]];
    let u = find_vertex(&g, &0);
    let e = edges(&g, &u).begin();

    let (weight, color) = edge_value(&g, &e);
    assert_eq!((*weight, *color), (2.5, Color::Red));
    assert_eq!(target_id(&g, &e), id_of(edge_element(&g, &e)));

    let (weight, _) = edge_value_mut(&mut g, &e);
    *weight = 7.0;
    assert_eq!(*edge_value(&g, &e).0, 7.0);
    assert_eq!(g[0][0], (1, 7.0, Color::Red));

    let (_, color) = edge_value_mut(&mut g, &e);
    *color = Color::Blue;
    assert_eq!(g[0][0].2, Color::Blue);
}

#[test]
fn single_component_tuple_yields_id() {
    let g: Vec<Vec<(u32,)>> = vec![vec![(1,)], vec![(0,)]];
    let u = find_vertex(&g, &1);
    let e = edges(&g, &u).begin();
    assert_eq!(*edge_value(&g, &e), 0);
    assert_eq!(classify::<(u32,)>(), ShapeKind::TupleLike { properties: 0 });
}

#[test]
fn pair_edges_in_deques() {
    let mut g: VecDeque<VecDeque<(u16, &str)>> =
        VecDeque::from(vec![VecDeque::from(vec![(1, "ab"), (0, "loop")]), VecDeque::new()]);
    let u = find_vertex(&g, &0);
    let e = find_vertex_edge(&g, &u, &0);
    assert_eq!(*edge_value(&g, &e), "loop");
    *edge_value_mut(&mut g, &e) = "self";
    assert_eq!(g[0][1], (0, "self"));
}

#[test]
fn linked_edges_write_through() {
    let mut g: Vec<LinkedList<(usize, i64)>> = vec![[(1, 5), (1, 6)].into_iter().collect(), LinkedList::new()];
    let at = {
        let u = find_vertex(&g, &0);
        let mut e = edges(&g, &u).begin();
        e.advance();
        edge_address(&g, &e)
    };
    *edge_value_mut_at(&mut g, &at).unwrap() *= 10;
    assert_eq!(g[0].iter().copied().collect::<Vec<_>>(), vec![(1, 5), (1, 60)]);
}

#[test]
fn linked_edges_write_through_an_equal_snapshot() {
    let mut g: Vec<LinkedList<(usize, i64)>> = vec![[(1, 5), (1, 6)].into_iter().collect(), LinkedList::new()];
    let snapshot = g.clone();
    let u = find_vertex(&snapshot, &0);
    let e = edges(&snapshot, &u).begin();
    *edge_value_mut(&mut g, &e) = -1;
    assert_eq!(g[0].front(), Some(&(1, -1)));
}

#[test]
fn scalar_vertices_value_is_edge_store() {
    let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![]];
    let u = vertices(&g).begin();
    assert_eq!(vertex_value(&g, &u), &vec![1, 2]);
}

#[test]
fn pair_vertices_carry_a_value() {
    let mut g: Vec<(Vec<usize>, String)> = vec![(vec![1], "src".into()), (vec![], "dst".into())];
    let v = find_vertex(&g, &1);
    vertex_value_mut(&mut g, &v).push_str("!");
    assert_eq!(vertex_value(&g, &v), "dst!");
    assert_eq!(g[1].1, "dst!");
}

struct Road {
    to: u32,
    km: f32,
    toll: bool,
}

impl EdgeShape for Road {
    type Id = u32;
    type Property<'a> = (&'a f32, &'a bool) where Self: 'a;
    type PropertyMut<'a> = (&'a mut f32, &'a mut bool) where Self: 'a;
    const KIND: ShapeKind = ShapeKind::Opaque;

    fn id_of(&self) -> u32 {
        self.to
    }

    fn property_of(&self) -> (&f32, &bool) {
        (&self.km, &self.toll)
    }

    fn property_of_mut(&mut self) -> (&mut f32, &mut bool) {
        (&mut self.km, &mut self.toll)
    }
}

#[test]
fn opaque_edges_use_their_own_extraction() {
    let mut g: Vec<Vec<Road>> = vec![
        vec![Road { to: 1, km: 12.0, toll: false }],
        vec![Road { to: 0, km: 12.5, toll: true }],
    ];
    let u = find_vertex(&g, &1);
    let e = edges(&g, &u).begin();
    assert_eq!(target_id(&g, &e), 0);
    assert_eq!(edge_value(&g, &e), (&12.5, &true));

    let (_, toll) = edge_value_mut(&mut g, &e);
    *toll = false;
    assert!(!g[1][0].toll);
}
