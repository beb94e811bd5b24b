//! Time-ordered push keys
//!
//! 20 characters: 8 encode the write time in milliseconds, 12 are random.
//! Keys sort lexicographically in creation order; keys generated within
//! the same millisecond increment the random part so ordering stays strict.

use rand::Rng;

const PUSH_CHARS: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const TIME_LEN: usize = 8;
const RANDOM_LEN: usize = 12;

#[derive(Debug, Default)]
pub struct PushIdGenerator {
    last_time: i64,
    last_random: [u8; RANDOM_LEN],
}

impl PushIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next key for a write happening at `now` (Unix millis)
    pub fn next_id(&mut self, now: i64) -> String {
        if now > self.last_time {
            self.last_time = now;
            let mut rng = rand::thread_rng();
            for slot in self.last_random.iter_mut() {
                *slot = rng.gen_range(0..64);
            }
        } else if !self.increment_random() {
            // Random part exhausted for this millisecond (or the clock went back)
            self.last_time += 1;
            self.last_random = [0; RANDOM_LEN];
        }

        let mut id = String::with_capacity(TIME_LEN + RANDOM_LEN);
        let mut time = self.last_time.max(0) as u64;
        let mut time_chars = [0u8; TIME_LEN];
        for slot in time_chars.iter_mut().rev() {
            *slot = PUSH_CHARS[(time % 64) as usize];
            time /= 64;
        }
        id.extend(time_chars.iter().map(|&b| b as char));
        id.extend(
            self.last_random
                .iter()
                .map(|&idx| PUSH_CHARS[idx as usize] as char),
        );
        id
    }

    fn increment_random(&mut self) -> bool {
        for slot in self.last_random.iter_mut().rev() {
            if *slot == 63 {
                *slot = 0;
            } else {
                *slot += 1;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_have_fixed_length() {
        let mut generator = PushIdGenerator::new();
        let id = generator.next_id(1_700_000_000_000);
        assert_eq!(id.len(), TIME_LEN + RANDOM_LEN);
        assert!(id.bytes().all(|b| PUSH_CHARS.contains(&b)));
    }

    #[test]
    fn test_ids_strictly_increase_within_same_millisecond() {
        let mut generator = PushIdGenerator::new();
        let mut previous = generator.next_id(1_700_000_000_000);
        for _ in 0..500 {
            let next = generator.next_id(1_700_000_000_000);
            assert!(next > previous, "{next} should sort after {previous}");
            previous = next;
        }
    }

    #[test]
    fn test_ids_increase_when_clock_goes_back() {
        let mut generator = PushIdGenerator::new();
        let first = generator.next_id(1_700_000_000_500);
        let second = generator.next_id(1_700_000_000_000);
        assert!(second > first);
    }

    #[test]
    fn test_later_time_sorts_later() {
        let mut a = PushIdGenerator::new();
        let mut b = PushIdGenerator::new();
        let early = a.next_id(1_700_000_000_000);
        let late = b.next_id(1_700_000_000_001);
        assert!(late > early);
    }

    #[test]
    fn test_exhausted_random_part_bumps_time() {
        let mut generator = PushIdGenerator::new();
        generator.next_id(1_000);
        generator.last_random = [63; RANDOM_LEN];
        let before_time = generator.last_time;
        generator.next_id(1_000);
        assert_eq!(generator.last_time, before_time + 1);
    }
}
