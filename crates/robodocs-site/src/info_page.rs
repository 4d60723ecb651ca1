//! Static informational page describing the robot REST architecture.
//!
//! The page is a fixed tree of sections and blocks. Rendering goes through
//! the same [`RenderBackend`] as markdown documents so both pages share one
//! style table.

use std::fmt::Write;

use robodocs_renderer::{NodeKind, RenderBackend, escape_html, slugify};

/// One block of static content.
#[derive(Debug, Clone, Copy)]
pub enum Block {
    /// Heading with level and text.
    Heading(u8, &'static str),
    /// Paragraph of plain text.
    Paragraph(&'static str),
    /// Unordered list of plain-text items.
    List(&'static [&'static str]),
    /// Code sample with optional language.
    Code(Option<&'static str>, &'static str),
}

/// Titled section of the page.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub blocks: &'static [Block],
}

/// Complete static page content.
#[derive(Debug, Clone, Copy)]
pub struct InfoPage {
    pub title: &'static str,
    pub tagline: &'static str,
    pub sections: &'static [Section],
}

const MOVE_ROBOT_JS: &str = r#"const robotIP = "192.168.1.100";
const port = 8080;

async function moveRobot(direction, speed, duration) {
  try {
    const response = await fetch(
      `http://${robotIP}:${port}/api/move`,
      {
        method: "POST",
        headers: {
          "Content-Type": "application/json",
        },
        body: JSON.stringify({
          direction: direction,
          speed: speed,
          duration: duration,
        }),
      }
    );

    const data = await response.json();
    console.log("Robot response:", data);
    return data;
  } catch (error) {
    console.error("Error controlling robot:", error);
  }
}

moveRobot("forward", 50, 2000);"#;

/// The robot REST API overview page.
pub const ROBOT_API_PAGE: InfoPage = InfoPage {
    title: "Android Robot Control via REST API",
    tagline: "Control your Android-based robot remotely using REST API calls",
    sections: &[
        Section {
            title: "How It Works",
            blocks: &[
                Block::Paragraph(
                    "The Android robot runs a web server that listens for HTTP requests. \
                     When you send REST API calls to the robot's IP address, it processes \
                     the commands and executes actions like movement, sensor readings, or \
                     other robot functions.",
                ),
                Block::Heading(3, "Architecture"),
                Block::List(&[
                    "Android device runs a REST API server (e.g., using Flask, Express, or \
                     native Android HTTP server)",
                    "Robot receives HTTP requests on a specific port (commonly 8080 or 5000)",
                    "Commands are sent as JSON payloads in POST requests",
                    "Robot responds with status codes and data (JSON format)",
                    "Both devices must be on the same network or accessible via IP",
                ]),
            ],
        },
        Section {
            title: "Example API Endpoints",
            blocks: &[
                Block::Heading(3, "Move Forward"),
                Block::Code(
                    Some("http"),
                    "POST http://ROBOT_IP:8080/api/move\n\
                     Body: {\"direction\": \"forward\", \"speed\": 50, \"duration\": 2000}",
                ),
                Block::Heading(3, "Turn Left/Right"),
                Block::Code(
                    Some("http"),
                    "POST http://ROBOT_IP:8080/api/turn\n\
                     Body: {\"direction\": \"left\", \"angle\": 90}",
                ),
                Block::Heading(3, "Stop Robot"),
                Block::Code(Some("http"), "POST http://ROBOT_IP:8080/api/stop"),
                Block::Heading(3, "Get Sensor Data"),
                Block::Code(Some("http"), "GET http://ROBOT_IP:8080/api/sensors"),
                Block::Heading(3, "Get Robot Status"),
                Block::Code(Some("http"), "GET http://ROBOT_IP:8080/api/status"),
            ],
        },
        Section {
            title: "Setup Instructions",
            blocks: &[
                Block::Heading(3, "1. Android Robot Setup"),
                Block::List(&[
                    "Install a web server framework on Android (Flask, Express.js, or native \
                     Android HTTP server)",
                    "Create API endpoints that handle robot commands",
                    "Connect robot hardware (motors, sensors) to Android device",
                    "Start the server and note the robot's IP address",
                ]),
                Block::Heading(3, "2. Network Configuration"),
                Block::List(&[
                    "Ensure both devices are on the same Wi-Fi network",
                    "Find the robot's IP address (Settings → About → Status on Android)",
                    "Configure firewall to allow incoming connections on the server port",
                ]),
                Block::Heading(3, "3. Making API Calls"),
                Block::List(&[
                    "Use fetch() or axios in JavaScript/TypeScript",
                    "Send POST requests for commands, GET requests for status",
                    "Include JSON payloads for command parameters",
                    "Handle responses and errors appropriately",
                ]),
            ],
        },
        Section {
            title: "Example Request (JavaScript)",
            blocks: &[Block::Code(Some("javascript"), MOVE_ROBOT_JS)],
        },
    ],
};

impl InfoPage {
    /// Render the page body (header and sections) as HTML.
    #[must_use]
    pub fn render<B: RenderBackend>(&self) -> String {
        let mut out = String::with_capacity(8192);

        out.push_str(r#"<header class="flex flex-col gap-4">"#);
        B::heading_start(1, &slugify(self.title), &mut out);
        write!(out, "{}</h1>", escape_html(self.title)).unwrap();
        B::open(NodeKind::Paragraph, &mut out);
        out.push_str(&escape_html(self.tagline));
        B::close(NodeKind::Paragraph, &mut out);
        out.push_str("</header>");

        for section in self.sections {
            out.push_str(r#"<section class="flex flex-col gap-6">"#);
            B::heading_start(2, &slugify(section.title), &mut out);
            write!(out, "{}</h2>", escape_html(section.title)).unwrap();
            for block in section.blocks {
                render_block::<B>(block, &mut out);
            }
            out.push_str("</section>");
        }

        out
    }
}

fn render_block<B: RenderBackend>(block: &Block, out: &mut String) {
    match *block {
        Block::Heading(level, text) => {
            B::heading_start(level, &slugify(text), out);
            write!(out, "{}</h{level}>", escape_html(text)).unwrap();
        }
        Block::Paragraph(text) => {
            B::open(NodeKind::Paragraph, out);
            out.push_str(&escape_html(text));
            B::close(NodeKind::Paragraph, out);
        }
        Block::List(items) => {
            B::open(NodeKind::UnorderedList, out);
            for item in items {
                B::open(NodeKind::ListItem, out);
                out.push_str(&escape_html(item));
                B::close(NodeKind::ListItem, out);
            }
            B::close(NodeKind::UnorderedList, out);
        }
        Block::Code(lang, content) => B::code_block(lang, content, out),
    }
}
