use go_ladder::board::Player;
use go_ladder::go::{Chains, FlatTile, PlacementKind, Tile};

fn flat(size: u8, x: u8, y: u8) -> FlatTile {
    Tile::new(x, y).to_flat(size)
}

fn build_chains(size: u8, tiles: &[((u8, u8), Player)]) -> Chains {
    let mut chains = Chains::new(size);
    for &((x, y), player) in tiles {
        chains.place_stone(flat(size, x, y), player).unwrap();
        chains.assert_valid();
    }
    chains
}

#[test]
fn corner_triangle_corner_first() {
    let tiles = [((0, 0), Player::Black), ((0, 1), Player::Black), ((1, 0), Player::Black)];
    let chains = build_chains(5, &tiles);
    println!("{}", chains);

    let group = chains.group_at(flat(5, 0, 0)).unwrap();
    assert_eq!(group.stone_count(), 3);
    assert_eq!(group.liberty_count(), 3);
    assert_eq!(chains.groups().count(), 1);
}

#[test]
fn corner_triangle_corner_last() {
    let tiles = [((0, 1), Player::Black), ((1, 0), Player::Black), ((0, 0), Player::Black)];
    let chains = build_chains(5, &tiles);
    println!("{}", chains);

    assert_eq!(chains, build_chains(5, &[((0, 0), Player::Black), ((0, 1), Player::Black), ((1, 0), Player::Black)]));
    let group = chains.group_at(flat(5, 1, 0)).unwrap();
    assert_eq!(group.stone_count(), 3);
    assert_eq!(group.liberty_count(), 3);
}

#[test]
fn merge_long_overlapping() {
    let mut tiles = vec![];
    for y in 0..5 {
        tiles.push(((1, y), Player::Black));
        tiles.push(((3, y), Player::Black));
    }
    tiles.push(((2, 0), Player::Black));

    let chains = build_chains(5, &tiles);
    println!("{}", chains);

    let group = chains.group_at(flat(5, 2, 0)).unwrap();
    assert_eq!(group.color, Player::Black);
    assert_eq!(group.stone_count(), 5 + 5 + 1);
    assert_eq!(group.liberty_count(), 5 + 5 + 4);
    assert_eq!(chains.groups().count(), 1);
}

#[test]
fn capture_gives_back_liberties() {
    // white wall on the left, black ring around it
    let mut tiles = vec![];
    for y in 0..3 {
        tiles.push(((0, y), Player::White));
        tiles.push(((1, y), Player::Black));
    }
    let mut chains = build_chains(5, &tiles);
    let black_before = *chains.group_at(flat(5, 1, 0)).unwrap();
    assert_eq!(chains.group_at(flat(5, 0, 0)).unwrap().liberty_count(), 1);

    let prepared = chains.prepare_place_stone(flat(5, 0, 3), Player::Black).unwrap();
    assert_eq!(prepared.kind, PlacementKind::Capture);
    assert!(prepared.kind.removes_existing_stones());

    let undo = chains.place_prepared(prepared);
    chains.assert_valid();
    assert_eq!(undo.captured_stone_count(), 3);
    assert_eq!(chains.stone_count_from(Player::White), 0);
    assert_eq!(chains.empty_count(), 25 - 4);
    assert!((0..3).all(|y| chains.empty_tiles().contains(flat(5, 0, y))));

    // the black column gained the freed tiles as liberties
    let black = chains.group_at(flat(5, 1, 0)).unwrap();
    assert_eq!(black.liberty_count(), black_before.liberty_count() + 3);

    chains.undo_place(undo);
    chains.assert_valid();
    assert_eq!(chains, build_chains(5, &tiles));
    assert_eq!(*chains.group_at(flat(5, 1, 0)).unwrap(), black_before);
}

#[test]
fn remove_group_frees_tiles() {
    let tiles = [((2, 2), Player::White), ((2, 3), Player::White), ((1, 2), Player::Black)];
    let mut chains = build_chains(5, &tiles);

    let id = chains.group_id_at(flat(5, 2, 2)).unwrap();
    let removed = chains.remove_group(id);
    chains.assert_valid();

    assert_eq!(removed.stone_count(), 2);
    assert!(chains.group(id).is_none());
    assert_eq!(chains.stone_at(flat(5, 2, 3)), None);
    assert_eq!(chains.group_at(flat(5, 1, 2)).unwrap().liberty_count(), 4);
    assert_eq!(chains, build_chains(5, &[((1, 2), Player::Black)]));
}

#[test]
fn placement_undo_chain() {
    let tiles = [
        ((1, 1), Player::Black),
        ((2, 1), Player::White),
        ((1, 2), Player::White),
        ((0, 1), Player::White),
        ((3, 3), Player::Black),
        ((3, 2), Player::Black),
    ];

    let mut chains = Chains::new(5);
    let mut snapshots = vec![chains.clone()];
    let mut undos = vec![];
    for &((x, y), player) in &tiles {
        undos.push(chains.place_stone(flat(5, x, y), player).unwrap());
        chains.assert_valid();
        snapshots.push(chains.clone());
    }

    // white captures the lone black stone
    let undo = chains.place_stone(flat(5, 1, 0), Player::White).unwrap();
    assert_eq!(undo.captured_stone_count(), 1);
    chains.undo_place(undo);
    assert_eq!(Some(&chains), snapshots.last());

    while let Some(undo) = undos.pop() {
        snapshots.pop();
        chains.undo_place(undo);
        chains.assert_valid();
        assert_eq!(Some(&chains), snapshots.last());
    }
    assert_eq!(chains.stone_count(), 0);
}

#[test]
fn fen() {
    let chains = build_chains(3, &[((0, 0), Player::Black), ((2, 2), Player::White)]);
    assert_eq!(chains.to_fen(), "..w/.../b..");
    assert_eq!(Chains::from_fen("..w/.../b..").as_ref(), Ok(&chains));
}
