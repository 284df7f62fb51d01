use std::collections::VecDeque;

use charring::RingBuffer;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Write(u8),
    Read,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![any::<u8>().prop_map(Op::Write), Just(Op::Read)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_matches_bounded_deque(capacity in 1usize..64, ops in prop::collection::vec(op(), 0..512)) {
        let mut ring = RingBuffer::<u8>::new(capacity).unwrap();
        let mut model: VecDeque<u8> = VecDeque::new();
        let mut evicted = 0u64;

        for op in ops {
            match op {
                Op::Write(v) => {
                    if model.len() == capacity {
                        model.pop_front();
                        evicted += 1;
                    }
                    model.push_back(v);
                    ring.write(v);
                }
                Op::Read => {
                    let expected = model.pop_front().unwrap_or_default();
                    prop_assert_eq!(ring.read(), expected);
                }
            }

            prop_assert!(ring.available() <= capacity);
            prop_assert_eq!(ring.available(), model.len());
            prop_assert_eq!(ring.available() + ring.free_space(), capacity);
            prop_assert_eq!(ring.is_full(), model.len() == capacity);
            prop_assert_eq!(ring.is_empty(), model.is_empty());
            prop_assert_eq!(ring.peek().copied(), model.front().copied());
        }

        prop_assert_eq!(ring.evicted(), evicted);
        prop_assert_eq!(ring.into_vec(), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_signed_len_validation(len in -1000i64..1000) {
        let result = RingBuffer::<u8>::with_len(len);
        if len > 0 {
            prop_assert_eq!(result.unwrap().capacity(), len as usize);
        } else {
            prop_assert!(result.is_err());
        }
    }
}
