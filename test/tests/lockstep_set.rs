//! Whole-set scenarios: a real `HostSession` and `PeerSession` on two
//! threads, talking over the in-memory transport with scripted
//! frontends. Placements are chosen so every match outcome is known in
//! advance, which lets the assertions pin the set bookkeeping, the
//! loser-bonus budgets, and the board replication all at once.

use std::thread;

use lifewar_client::PeerSession;
use lifewar_server::HostSession;
use lifewar_shared::{Board, Outcome, SessionError};
use lifewar_test::helpers::{pair, LocalTransport, ScriptedFrontend, ScriptedPlacement};

type FinishedSide<S> = (Result<Outcome, SessionError>, S);

fn run_set(
    host_script: Vec<ScriptedPlacement>,
    peer_script: Vec<ScriptedPlacement>,
) -> (
    FinishedSide<HostSession<LocalTransport, ScriptedFrontend>>,
    FinishedSide<PeerSession<LocalTransport, ScriptedFrontend>>,
) {
    let _ = env_logger::builder().is_test(true).try_init();
    let (host_end, peer_end) = pair();

    let host_thread = thread::spawn(move || {
        let mut session = HostSession::new(host_end, ScriptedFrontend::new(host_script));
        let result = session.run();
        (result, session)
    });
    let peer_thread = thread::spawn(move || {
        let mut session = PeerSession::new(peer_end, ScriptedFrontend::new(peer_script));
        let result = session.run();
        (result, session)
    });

    (host_thread.join().unwrap(), peer_thread.join().unwrap())
}

/// 77 board redraws per match: one at placement start, one for the
/// merged board, 75 during simulation.
const DISPLAYS_PER_SET: usize = 77 * 5;

#[test]
fn peer_block_sweeps_the_set() {
    // The peer seeds a still-life block in match one and the host places
    // nothing at all, so the block survives every match and the peer
    // wins all five.
    use ScriptedPlacement::Place;
    let ((host_result, host), (peer_result, peer)) = run_set(
        vec![],
        vec![Place(10, 10), Place(10, 11), Place(11, 10), Place(11, 11)],
    );

    assert_eq!(host_result.unwrap(), Outcome::PeerWin);
    assert_eq!(peer_result.unwrap(), Outcome::PeerWin);

    let set = host.set();
    assert_eq!((set.host_wins, set.peer_wins, set.rounds_remaining), (0, 5, 0));

    // Both replicas ended on the same board without ever exchanging
    // board contents after the merges.
    assert_eq!(host.board(), peer.board());
    let score = host.board().score();
    assert_eq!((score.red, score.blue), (0, 4));

    // The host lost every match, so every later match grants the bonus,
    // and only the flat bonus: it never stacks.
    assert_eq!(
        host.frontend().budget_lines(),
        [
            "10 cells remaining.",
            "25 cells remaining.",
            "25 cells remaining.",
            "25 cells remaining.",
            "25 cells remaining.",
        ]
    );
    // The peer never lost: base budget throughout, spent down by its
    // four match-one placements.
    assert_eq!(
        peer.frontend().budget_lines(),
        [
            "10 cells remaining.",
            "9 cells remaining.",
            "8 cells remaining.",
            "7 cells remaining.",
            "6 cells remaining.",
            "10 cells remaining.",
            "10 cells remaining.",
            "10 cells remaining.",
            "10 cells remaining.",
        ]
    );

    assert_eq!(host.frontend().status_count("You lost! Hit any key."), 5);
    assert_eq!(peer.frontend().status_count("You won! Hit any key."), 5);

    assert_eq!(host.frontend().boards_displayed, DISPLAYS_PER_SET);
    assert_eq!(peer.frontend().boards_displayed, DISPLAYS_PER_SET);
}

#[test]
fn host_triomino_sweeps_the_set() {
    // The L-triomino births its corner on the first generation and
    // settles into a block; the host wins every match 4-0.
    use ScriptedPlacement::Place;
    let ((host_result, host), (peer_result, peer)) =
        run_set(vec![Place(5, 5), Place(5, 6), Place(6, 5)], vec![]);

    assert_eq!(host_result.unwrap(), Outcome::HostWin);
    assert_eq!(peer_result.unwrap(), Outcome::HostWin);

    let set = host.set();
    assert_eq!((set.host_wins, set.peer_wins, set.rounds_remaining), (5, 0, 0));

    assert_eq!(host.board(), peer.board());
    let score = host.board().score();
    assert_eq!((score.red, score.blue), (4, 0));

    // This time the bonus lands on the peer's budgets.
    assert_eq!(
        peer.frontend().budget_lines(),
        [
            "10 cells remaining.",
            "25 cells remaining.",
            "25 cells remaining.",
            "25 cells remaining.",
            "25 cells remaining.",
        ]
    );
}

#[test]
fn colliding_placements_cancel_into_a_drawn_set() {
    // Both sides claim (7,7); the merge cancels the pair, every match
    // simulates an empty board, and five ties draw the set.
    use ScriptedPlacement::Place;
    let ((host_result, host), (peer_result, peer)) =
        run_set(vec![Place(7, 7)], vec![Place(7, 7)]);

    assert_eq!(host_result.unwrap(), Outcome::Tie);
    assert_eq!(peer_result.unwrap(), Outcome::Tie);

    let set = host.set();
    assert_eq!((set.host_wins, set.peer_wins, set.rounds_remaining), (0, 0, 0));

    assert_eq!(host.board(), &Board::new());
    assert_eq!(peer.board(), &Board::new());

    assert_eq!(host.frontend().status_count("It's a tie! Hit any key."), 5);
}

#[test]
fn placeless_set_terminates_as_a_draw() {
    // Ties consume rounds too, so a set where nobody ever places ends
    // after five matches instead of looping forever.
    let ((host_result, host), (peer_result, _peer)) = run_set(vec![], vec![]);

    assert_eq!(host_result.unwrap(), Outcome::Tie);
    assert_eq!(peer_result.unwrap(), Outcome::Tie);
    assert_eq!(host.set().rounds_remaining, 0);
}
