use seabattle::{Cell, CellSet};

#[test]
fn insert_and_contains() {
    let mut set = CellSet::new();
    assert!(set.is_empty());
    set.insert(Cell::new(3, 4));
    set.insert(Cell::new(3, 4));
    assert_eq!(set.len(), 1);
    assert!(set.contains(Cell::new(3, 4)));
    assert!(!set.contains(Cell::new(4, 3)));
}

#[test]
fn out_of_bounds_cells_are_ignored() {
    let mut set = CellSet::new();
    set.insert(Cell::new(10, 0));
    set.insert(Cell::new(0, 10));
    set.insert(Cell::new(255, 255));
    assert!(set.is_empty());
    assert!(!set.contains(Cell::new(10, 0)));
}

#[test]
fn iteration_is_row_major() {
    let set: CellSet = [Cell::new(9, 9), Cell::new(0, 1), Cell::new(3, 0)]
        .into_iter()
        .collect();
    let cells: Vec<Cell> = set.iter().collect();
    assert_eq!(cells, vec![Cell::new(3, 0), Cell::new(0, 1), Cell::new(9, 9)]);
}

#[test]
fn expand_grows_by_one_in_every_direction() {
    let set: CellSet = [Cell::new(5, 5)].into_iter().collect();
    assert_eq!(set.expand().len(), 9);

    let corner: CellSet = [Cell::new(0, 0)].into_iter().collect();
    assert_eq!(corner.expand().len(), 4);
}

#[test]
fn set_operations() {
    let a: CellSet = [Cell::new(0, 0), Cell::new(1, 0)].into_iter().collect();
    let b: CellSet = [Cell::new(1, 0), Cell::new(2, 0)].into_iter().collect();

    assert_eq!((a | b).len(), 3);
    assert_eq!((a & b).len(), 1);
    assert!(a.intersects(b));
    assert!((a & b).contains(Cell::new(1, 0)));

    let everything = !CellSet::new();
    assert_eq!(everything.len(), 100);
    assert_eq!((!everything).len(), 0);
}
