/*
    Sectograph
    https://github.com/dbalsom/sectograph

    Copyright 2024 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    demos/dayviz/src/main.rs

    This is a simple example of how to use Sectograph to lay out a sample day
    schedule and write it to an SVG file.
*/
use std::path::PathBuf;

use bpaf::{construct, short, OptionParser, Parser};

use sectograph::{layout_tasks, Color, SectographParams, Task};
use sectograph_svg::SvgRenderer;

#[derive(Clone, Debug)]
struct Out {
    size: f32,
    out_filename: PathBuf,
}

/// Set up bpaf argument parsing.
fn opts() -> OptionParser<Out> {
    let size = short('s')
        .long("size")
        .help("Width and height of the output image")
        .argument::<f32>("SIZE")
        .fallback(512.0);

    let out_filename = short('o')
        .long("out")
        .help("Filename of SVG to write")
        .argument::<PathBuf>("FILE")
        .fallback(PathBuf::from("dayviz.svg"));

    construct!(Out { size, out_filename })
        .to_options()
        .descr("dayviz: render a sample day schedule as an SVG dial")
}

/// A plausible working day, including an overnight task that wraps through
/// midnight and a zero-length reminder.
fn sample_day() -> Vec<Task> {
    vec![
        Task::new("standup", "Standup", "09:30", "09:45", Color::from_rgb8(0x4c, 0xaf, 0x50)),
        Task::new("deep-work", "Deep work", "10:00", "12:30", Color::from_rgb8(0x21, 0x96, 0xf3)),
        Task::new("lunch", "Lunch", "12:30", "13:15", Color::from_rgb8(0xff, 0x98, 0x00)),
        Task::new("review", "Code review", "14:00", "15:30", Color::from_rgb8(0x9c, 0x27, 0xb0)),
        Task::new("gym", "Gym", "18:00", "19:00", Color::from_rgb8(0xf4, 0x43, 0x36)),
        Task::new("sleep", "Sleep", "23:00", "07:00", Color::from_rgb8(0x3f, 0x51, 0xb5)),
        Task::new("meds", "Medication", "21:00", "21:00", Color::from_rgb8(0x00, 0xbc, 0xd4)),
    ]
}

fn main() {
    env_logger::init();

    // Get the command line options.
    let opts = opts().run();

    let half = opts.size / 2.0;
    let params = SectographParams {
        inner_radius: half * 0.60,
        outer_radius: half * 0.95,
        corner_radius: half * 0.066,
        marker_inset: half * 0.11,
        ..SectographParams::default()
    };

    let list = match layout_tasks(&sample_day(), &params) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Error laying out schedule: {}", e);
            return;
        }
    };

    log::debug!("Layout produced {} arcs.", list.len());

    let document = SvgRenderer::new()
        .with_view_box(0.0, 0.0, opts.size * 0.95, opts.size * 0.95)
        .with_background(Color::from_rgb8(0x12, 0x12, 0x12))
        .render(&list);

    match svg::save(&opts.out_filename, &document) {
        Ok(()) => println!("Wrote {}", opts.out_filename.display()),
        Err(e) => eprintln!("Error writing SVG: {}", e),
    }
}
