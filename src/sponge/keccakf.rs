/// Number of rounds of keccak-f[1600].
pub const ROUNDS: usize = 24;

const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

// Rotation offsets in the order lanes are visited by the π walk starting at lane 1.
const RHO: [u32; 24] = [1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44];

// Lane visited at each step of the π walk, indexed as x + 5y.
const PI: [usize; 24] = [10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1];

/// Applies keccak-f[1600] to a state of 25 lanes indexed as `x + 5y`.
pub fn keccak_f1600(lanes: &mut [u64; 25]) {
    for rc in ROUND_CONSTANTS {
        // θ
        let mut columns = [0u64; 5];
        for (x, column) in columns.iter_mut().enumerate() {
            *column = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
        }
        for x in 0..5 {
            let d = columns[(x + 4) % 5] ^ columns[(x + 1) % 5].rotate_left(1);
            for y in (0..25).step_by(5) {
                lanes[y + x] ^= d;
            }
        }

        // ρ and π
        let mut carried = lanes[1];
        for (&target, &offset) in PI.iter().zip(RHO.iter()) {
            let displaced = lanes[target];
            lanes[target] = carried.rotate_left(offset);
            carried = displaced;
        }

        // χ
        for y in (0..25).step_by(5) {
            let row = [lanes[y], lanes[y + 1], lanes[y + 2], lanes[y + 3], lanes[y + 4]];
            for x in 0..5 {
                lanes[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // ι
        lanes[0] ^= rc;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_zero_state() {
        let mut lanes = [0u64; 25];
        keccak_f1600(&mut lanes);
        assert_eq!(0xF1258F7940E1DDE7, lanes[0]);
        assert_eq!(0x84D5CCF933C0478A, lanes[1]);

        keccak_f1600(&mut lanes);
        assert_eq!(0x2D5C954DF96ECB3C, lanes[0]);
    }
}
