//! A small but realistic command grammar with matching registries.

use mcfunction::Context;
use once_cell::sync::Lazy;

pub const COMMANDS: &str = r#"{
  "type": "root",
  "children": {
    "say": {
      "type": "literal",
      "children": {
        "message": { "type": "argument", "parser": "minecraft:message", "executable": true }
      }
    },
    "stop": { "type": "literal", "executable": true },
    "time": {
      "type": "literal",
      "children": {
        "add": {
          "type": "literal",
          "children": {
            "time": {
              "type": "argument",
              "parser": "minecraft:time",
              "properties": { "min": 0 },
              "executable": true
            }
          }
        },
        "query": {
          "type": "literal",
          "children": {
            "daytime": { "type": "literal", "executable": true },
            "gametime": { "type": "literal", "executable": true }
          }
        }
      }
    },
    "kill": {
      "type": "literal",
      "executable": true,
      "children": {
        "targets": { "type": "argument", "parser": "minecraft:entity", "executable": true }
      }
    },
    "setblock": {
      "type": "literal",
      "children": {
        "pos": {
          "type": "argument",
          "parser": "minecraft:block_pos",
          "children": {
            "block": { "type": "argument", "parser": "minecraft:block_state", "executable": true }
          }
        }
      }
    },
    "particle": {
      "type": "literal",
      "children": {
        "name": { "type": "argument", "parser": "minecraft:particle", "executable": true }
      }
    },
    "pick": {
      "type": "literal",
      "children": {
        "count": {
          "type": "argument",
          "parser": "brigadier:integer",
          "properties": { "min": 0 },
          "executable": true
        },
        "name": {
          "type": "argument",
          "parser": "brigadier:string",
          "properties": { "type": "word" },
          "executable": true
        }
      }
    },
    "execute": {
      "type": "literal",
      "children": {
        "as": {
          "type": "literal",
          "children": {
            "targets": { "type": "argument", "parser": "minecraft:entity", "redirect": ["execute"] }
          }
        },
        "run": { "type": "literal", "redirect": [] }
      }
    }
  }
}"#;

pub const BLOCK_STATES: &str = r#"{
  "minecraft:barrel": {
    "facing": ["north", "east", "south", "west", "up", "down"],
    "open": ["true", "false"]
  },
  "minecraft:stone": {}
}"#;

pub const REGISTRIES: &str = r#"{
  "minecraft:particle_type": ["minecraft:flame", "minecraft:dust", "minecraft:block"]
}"#;

/// The shared context every test parses against.
pub static CTX: Lazy<Context> = Lazy::new(|| {
    Context::from_json(COMMANDS, BLOCK_STATES, REGISTRIES).expect("fixture grammar loads")
});
