use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{random_fleet, CellSet, FLEET_CELLS, FLEET_SIZE};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Generated fleets are legal: in bounds, correct total occupancy and
    /// no two hulls within Chebyshev distance 1 of each other.
    #[test]
    fn fleets_are_legal(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = random_fleet(&mut rng);

        prop_assert_eq!(fleet.len(), FLEET_SIZE);
        for ship in &fleet {
            prop_assert!(ship.fits());
        }

        for (i, a) in fleet.iter().enumerate() {
            for b in fleet.iter().skip(i + 1) {
                prop_assert!(
                    !a.mask().expand().intersects(b.mask()),
                    "hulls touch: {:?} and {:?}",
                    a,
                    b
                );
            }
        }

        let occupied: CellSet = fleet.iter().flat_map(|ship| ship.cells()).collect();
        prop_assert_eq!(occupied.len(), FLEET_CELLS);
    }
}
