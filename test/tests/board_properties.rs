//! Property tests over randomly seeded boards: replication rests
//! entirely on the automaton being a pure function of the board, so the
//! determinism property gets hammered the hardest.

use proptest::prelude::*;

use lifewar_shared::{recv_board, send_board, Board, Color, BOARD_SIZE, GENERATIONS_PER_MATCH};
use lifewar_test::helpers::pair;

fn arb_board() -> impl Strategy<Value = Board> {
    let coord = 0..BOARD_SIZE as i32;
    proptest::collection::vec((coord.clone(), coord, any::<bool>()), 0..120).prop_map(|seeds| {
        let mut board = Board::new();
        for (row, col, red) in seeds {
            let color = if red { Color::Red } else { Color::Blue };
            // Duplicate coordinates simply fail to place, like a player
            // trying to take an occupied cell.
            board.place(row, col, color);
        }
        board
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn two_replicas_agree_after_a_full_match(board in arb_board()) {
        let mut host_copy = board.clone();
        let mut peer_copy = board;
        for _ in 0..GENERATIONS_PER_MATCH {
            host_copy.step();
            peer_copy.step();
            prop_assert_eq!(&host_copy, &peer_copy);
        }
    }

    #[test]
    fn stepping_upholds_the_cell_invariants(mut board in arb_board()) {
        board.step();
        for row in 0..BOARD_SIZE as i32 {
            for col in 0..BOARD_SIZE as i32 {
                let cell = board.get(row, col);
                prop_assert_eq!(cell.alive, cell.pending);
                prop_assert_eq!(cell.alive, cell.color.is_some());
            }
        }
    }

    #[test]
    fn board_transfer_reproduces_the_live_cells(board in arb_board()) {
        let (mut sender, mut receiver) = pair();
        send_board(&mut sender, &board).unwrap();
        let received = recv_board(&mut receiver).unwrap();
        prop_assert_eq!(
            received.live_cells().collect::<Vec<_>>(),
            board.live_cells().collect::<Vec<_>>()
        );
    }
}
