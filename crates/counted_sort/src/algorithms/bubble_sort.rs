use crate::SortStatistics;

pub fn sort(data: &mut [u32]) -> SortStatistics {
    let mut stats = SortStatistics::new(data.len());
    let mut pass_len = data.len();
    let mut swapped = true;

    while swapped {
        swapped = false;
        for i in 1..pass_len {
            if stats.compare(data[i] < data[i - 1]) {
                stats.swap(data, i, i - 1);
                swapped = true;
            }
        }
        // The largest remaining element has bubbled to the end.
        pass_len = pass_len.saturating_sub(1);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_three() {
        let mut data = [3_u32, 2, 1];
        let stats = sort(&mut data);
        assert_eq!(data, [1, 2, 3]);
        assert_eq!(stats.compares, 3);
        assert_eq!(stats.moves, 9);
        assert_eq!(stats.max_ds_size, 0);
    }

    #[test]
    fn sorted_input_takes_one_pass() {
        let mut data = (0..50_u32).collect::<Vec<_>>();
        let stats = sort(&mut data);
        assert_eq!(stats.compares, 49);
        assert_eq!(stats.moves, 0);
    }

    #[test]
    fn tiny_inputs() {
        let mut empty: [u32; 0] = [];
        assert_eq!(sort(&mut empty), SortStatistics::new(0));
        let mut one = [9_u32];
        assert_eq!(sort(&mut one), SortStatistics::new(1));
    }
}
