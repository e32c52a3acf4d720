/// decides which movement ticks are preceded by a relocation tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cadence {
    relocation_every: usize,
    since_relocation: usize,
}

impl Cadence {
    /// `relocation_every == 0` never relocates
    pub fn new(relocation_every: usize) -> Self {
        Self {
            relocation_every,
            since_relocation: 0,
        }
    }

    /// advances one movement tick; true when a relocation is due first
    pub fn advance(&mut self) -> bool {
        if self.relocation_every == 0 {
            return false;
        }

        self.since_relocation += 1;
        if self.since_relocation >= self.relocation_every {
            self.since_relocation = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, vec![false, false, false, false])]
    #[case(1, vec![true, true, true, true])]
    #[case(3, vec![false, false, true, false, false, true])]
    fn test_cadence(#[case] every: usize, #[case] expected: Vec<bool>) {
        let mut cadence = Cadence::new(every);
        let fired: Vec<bool> = (0..expected.len()).map(|_| cadence.advance()).collect();
        assert_eq!(fired, expected);
    }
}
