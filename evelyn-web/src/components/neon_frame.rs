//! Phone-shaped frame ringed with animated neon bulbs.
use evelyn_game::LightPattern;
use yew::prelude::*;

const BULBS_TOP: usize = 36;
const BULBS_SIDE: usize = 26;
const BULB_DELAY_MS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// A bulb placed along one edge; `pos` runs from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bulb {
    pub edge: Edge,
    pub pos: f64,
}

#[allow(clippy::cast_precision_loss)]
fn spread(edge: Edge, count: usize) -> impl Iterator<Item = Bulb> {
    let span = count.saturating_sub(1).max(1);
    (0..count).map(move |i| Bulb {
        edge,
        pos: i as f64 / span as f64,
    })
}

/// Bulb positions for the frame, top and bottom first, then both sides.
#[must_use]
pub fn bulb_layout(count_top: usize, count_side: usize) -> Vec<Bulb> {
    spread(Edge::Top, count_top)
        .chain(spread(Edge::Bottom, count_top))
        .chain(spread(Edge::Left, count_side))
        .chain(spread(Edge::Right, count_side))
        .collect()
}

fn bulb_style(bulb: Bulb, idx: usize) -> String {
    let along = format!("calc({:.2}% - 5px)", bulb.pos * 100.0);
    let placement = match bulb.edge {
        Edge::Top => format!("top:6px;left:{along};"),
        Edge::Bottom => format!("bottom:6px;left:{along};"),
        Edge::Left => format!("left:6px;top:{along};"),
        Edge::Right => format!("right:6px;top:{along};"),
    };
    format!("{placement}animation-delay:{}ms;", idx * BULB_DELAY_MS)
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub pattern: LightPattern,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(NeonFrame)]
pub fn neon_frame(props: &Props) -> Html {
    let class = classes!("bulb", props.pattern.key());
    html! {
        <div class="phone-shell">
            <div class="phone">
                <div class="neon-border" aria-hidden="true">
                    { for bulb_layout(BULBS_TOP, BULBS_SIDE).into_iter().enumerate().map(|(idx, bulb)| html! {
                        <div key={idx} class={class.clone()} style={bulb_style(bulb, idx)} />
                    }) }
                </div>
                <div class="phone-screen">{ props.children.clone() }</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_full_ring_of_bulbs() {
        let bulbs = bulb_layout(BULBS_TOP, BULBS_SIDE);
        assert_eq!(bulbs.len(), 2 * BULBS_TOP + 2 * BULBS_SIDE);
        let top: Vec<_> = bulbs.iter().filter(|b| b.edge == Edge::Top).collect();
        assert!(top[0].pos.abs() < f64::EPSILON);
        assert!((top[BULBS_TOP - 1].pos - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_bulb_edge_does_not_divide_by_zero() {
        let bulbs = bulb_layout(1, 0);
        assert_eq!(bulbs.len(), 2);
        assert!(bulbs.iter().all(|b| b.pos.abs() < f64::EPSILON));
    }

    #[test]
    fn styles_anchor_to_their_edge() {
        let style = bulb_style(Bulb { edge: Edge::Right, pos: 0.5 }, 3);
        assert!(style.starts_with("right:6px;top:calc(50.00% - 5px);"));
        assert!(style.ends_with("animation-delay:120ms;"));
    }
}
