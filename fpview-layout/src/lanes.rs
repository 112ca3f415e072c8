use num_traits::{PrimInt, Unsigned};

/// Assign a display lane to every span so that no two overlapping spans
/// share a lane.
///
/// Spans are inclusive `(start, end)` pairs and must satisfy `start <= end`.
/// The returned vector is parallel to `spans`.
///
/// Spans are visited in `(start, end)` order; each one takes the first lane
/// whose last end lies strictly before its start, or opens a new lane. For
/// interval graphs this first-fit sweep uses exactly as many lanes as the
/// deepest point of overlap, see [`max_overlap_depth`]. The sort is stable,
/// so identical spans are placed in input order.
///
/// # Examples
///
/// ```
/// use fpview_layout::assign_lanes;
///
/// let spans = vec![(100u32, 200), (150, 300), (201, 250), (301, 400)];
/// assert_eq!(assign_lanes(&spans), vec![0, 1, 0, 0]);
/// ```
pub fn assign_lanes<I>(spans: &[(I, I)]) -> Vec<usize>
where
    I: PrimInt + Unsigned,
{
    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by_key(|&idx| spans[idx]);

    let mut lane_ends: Vec<I> = Vec::new();
    let mut lanes = vec![0usize; spans.len()];

    for idx in order {
        let (start, end) = spans[idx];
        let lane = match lane_ends.iter().position(|&lane_end| lane_end < start) {
            Some(lane) => {
                lane_ends[lane] = end;
                lane
            }
            None => {
                lane_ends.push(end);
                lane_ends.len() - 1
            }
        };
        lanes[idx] = lane;
    }

    lanes
}

/// The largest number of inclusive spans covering any single coordinate.
///
/// ```
/// use fpview_layout::max_overlap_depth;
///
/// // 10..=20 and 20..=30 share position 20
/// assert_eq!(max_overlap_depth(&[(10u32, 20), (20, 30), (31, 40)]), 2);
/// ```
pub fn max_overlap_depth<I>(spans: &[(I, I)]) -> usize
where
    I: PrimInt + Unsigned,
{
    // (coordinate, is_end): starts sort before ends at the same coordinate
    // because an inclusive end still covers that position.
    let mut events: Vec<(I, bool)> = Vec::with_capacity(spans.len() * 2);
    for &(start, end) in spans {
        events.push((start, false));
        events.push((end, true));
    }
    events.sort();

    let mut depth = 0usize;
    let mut max_depth = 0usize;
    for (_, is_end) in events {
        if is_end {
            depth -= 1;
        } else {
            depth += 1;
            max_depth = max_depth.max(depth);
        }
    }

    max_depth
}
