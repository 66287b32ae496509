use std::path::PathBuf;

use nof1_burden::ctx::Ctx;
use nof1_burden::input::InputSource;
use nof1_burden::pipeline::Pipeline;
use nof1_burden::pipeline::stage1_input::Stage1Input;
use nof1_burden::pipeline::stage2_normalize::Stage2Normalize;
use nof1_burden::pipeline::stage3_predict::Stage3Predict;

/// Demo patient analysed up to prediction, nothing written.
pub fn analysed_demo_ctx(out_dir: PathBuf, horizons: Vec<u32>) -> Ctx {
    let mut ctx = Ctx::new(
        InputSource::Demo,
        out_dir,
        horizons,
        false,
        false,
        false,
        "0.0.0-test",
    );
    Pipeline::new(vec![
        Box::new(Stage1Input::new()),
        Box::new(Stage2Normalize::new()),
        Box::new(Stage3Predict::new()),
    ])
    .run(&mut ctx)
    .unwrap();
    ctx
}
