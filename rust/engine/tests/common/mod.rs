//! Shared hand-history fixtures.
#![allow(dead_code)]

/// Four-handed hand with a missed-blind post and an all-in raise that loses.
pub const MULTIWAY_ALL_IN: &str = "\
PokerStars Home Game Hand #210000000001: {Friday Club} Hold'em No Limit (5/10) - 2021/03/05 21:00:00 ET
Table 'Friday' 6-max (Play Money) Seat #1 is the button
Seat 1: alice (1000 in chips)
Seat 2: bob (1000 in chips)
Seat 3: carol (1000 in chips)
Seat 4: dave (405 in chips)
bob: posts small blind 5
carol: posts big blind 10
dave: posts small & big blinds 15
*** HOLE CARDS ***
alice: raises 20 to 30
bob: calls 25
carol: calls 20
dave: calls 20
*** FLOP *** [2c 7d Jh]
bob: checks
carol: bets 50
dave: raises 320 to 370 and is all-in
alice: folds
bob: folds
carol: calls 320
*** TURN *** [2c 7d Jh] [Qs]
*** RIVER *** [2c 7d Jh Qs] [3h]
*** SHOW DOWN ***
carol: shows [Jd Js] (three of a kind, Jacks)
dave: shows [Ac Ad] (a pair of Aces)
carol collected 825 from pot
*** SUMMARY ***
Total pot 865 | Rake 40
Board [2c 7d Jh Qs 3h]
Seat 1: alice (button) folded on the Flop
Seat 2: bob (small blind) folded on the Flop
Seat 3: carol (big blind) showed [Jd Js] and won (825) with three of a kind, Jacks
Seat 4: dave showed [Ac Ad] and lost with a pair of Aces
";

/// Three-handed hand where an uncalled turn raise is returned.
pub const UNCALLED_RETURN: &str = "\
PokerStars Home Game Hand #210000000002: {Friday Club} Hold'em No Limit (5/10) - 2021/03/05 21:02:10 ET
Table 'Friday' 6-max (Play Money) Seat #2 is the button
Seat 1: alice (1000 in chips)
Seat 2: bob (1000 in chips)
Seat 3: carol (1000 in chips)
carol: posts small blind 5
alice: posts big blind 10
*** HOLE CARDS ***
bob: raises 30 to 40
carol: calls 35
alice: calls 30
*** FLOP *** [4s 8s Kd]
carol: bets 100
alice: calls 100
bob: raises 200 to 300
carol: calls 200
alice: folds
*** TURN *** [4s 8s Kd] [9c]
carol: checks
bob: bets 100
carol: raises 300 to 400
bob: folds
Uncalled bet (300) returned to carol
carol collected 970 from pot
carol: doesn't show hand
*** SUMMARY ***
Total pot 1020 | Rake 50
Board [4s 8s Kd 9c]
Seat 1: alice (big blind) folded on the Flop
Seat 2: bob (button) folded on the Turn
Seat 3: carol (small blind) collected (970)
";

/// Heads-up split pot.
pub const SPLIT_POT: &str = "\
PokerStars Home Game Hand #210000000003: {Friday Club} Hold'em No Limit (5/10) - 2021/03/05 21:05:42 ET
Table 'Friday' 6-max (Play Money) Seat #1 is the button
Seat 1: alice (1000 in chips)
Seat 2: bob (1000 in chips)
bob: posts small blind 5
alice: posts big blind 10
*** HOLE CARDS ***
bob: calls 5
alice: checks
*** FLOP *** [Ah Kh Qh]
bob: bets 20
alice: calls 20
*** SHOW DOWN ***
bob: shows [Jh Th] (a royal flush)
alice: shows [Jh Th] (a royal flush)
alice collected 29 from pot
bob collected 28 from pot
*** SUMMARY ***
Total pot 60 | Rake 3
Board [Ah Kh Qh]
Seat 1: alice (button) showed [Jh Th] and won (29) with a royal flush
Seat 2: bob showed [Jh Th] and won (28) with a royal flush
";

pub fn archive() -> String {
    [MULTIWAY_ALL_IN, UNCALLED_RETURN, SPLIT_POT].join("\n")
}

pub fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
