use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScoreBoardProps {
    pub time: u32,
    pub score: u32,
}

#[function_component(ScoreBoard)]
pub fn score_board(props: &ScoreBoardProps) -> Html {
    html! {
        <div class="score-board">
            <div class="score-board__item">
                <span class="score-board__label">{"Time"}</span>
                <span class="score-board__time">{ props.time }</span>
            </div>
            <div class="score-board__item">
                <span class="score-board__label">{"Score"}</span>
                <span class="score-board__score">{ props.score }</span>
            </div>
        </div>
    }
}
