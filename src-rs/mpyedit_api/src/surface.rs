//! The static micro:bit MicroPython API tables.
//!
//! Two catalogs describe the surface: the base API that every supported
//! board ships, and the extra modules that only full-capability board
//! revisions add. Both are built once at first use and never mutated.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::{
    catalog::{ApiCatalog, merge},
    node::ApiNode::{self, Bare, Members},
};

// Pin capability tiers of the edge connector: the three large pads are
// touch-capable, a handful more are analog-capable, the rest are digital
// only. pin17 and pin18 are power pins and have no API.
const TOUCH_PIN_MEMBERS: &[&str] = &[
    "is_touched",
    "read_analog",
    "read_digital",
    "set_analog_period",
    "set_analog_period_microseconds",
    "write_analog",
    "write_digital",
];
const ANALOG_PIN_MEMBERS: &[&str] = &[
    "read_analog",
    "read_digital",
    "set_analog_period",
    "set_analog_period_microseconds",
    "write_analog",
    "write_digital",
];
const DIGITAL_PIN_MEMBERS: &[&str] = &["read_digital", "write_digital"];

// time/utime, collections/ucollections and struct/ustruct are the same
// modules under their CPython and MicroPython names.
const TIME_MEMBERS: &[&str] = &[
    "sleep",
    "sleep_ms",
    "sleep_us",
    "ticks_ms",
    "ticks_us",
    "ticks_add",
    "ticks_diff",
];
const COLLECTIONS_MEMBERS: &[&str] = &["namedtuple", "OrderedDict"];
const STRUCT_MEMBERS: &[&str] = &["calcsize", "pack", "pack_into", "unpack", "unpack_from"];

static BASE: LazyLock<ApiCatalog> = LazyLock::new(base_modules);
static EXTRA: LazyLock<ApiCatalog> = LazyLock::new(extra_modules);
static FULL: LazyLock<ApiCatalog> = LazyLock::new(|| merge(&BASE, &EXTRA));

/// The MicroPython API that every supported board ships.
#[must_use]
pub fn base_catalog() -> &'static ApiCatalog {
    &BASE
}

/// The modules that only full-capability board revisions add.
#[must_use]
pub fn extra_catalog() -> &'static ApiCatalog {
    &EXTRA
}

/// The base API merged with the extra modules.
#[must_use]
pub fn full_catalog() -> &'static ApiCatalog {
    &FULL
}

fn submodules<const N: usize>(entries: [(&'static str, ApiNode); N]) -> ApiNode {
    ApiNode::Submodules(IndexMap::from(entries))
}

fn base_modules() -> ApiCatalog {
    ApiCatalog::new([
        (
            "microbit",
            submodules([
                (
                    "Image",
                    Members(&[
                        "ALL_CLOCKS",
                        "ANGRY",
                        "ARROW_E",
                        "ARROW_N",
                        "ARROW_NE",
                        "ARROW_NW",
                        "ARROW_S",
                        "ARROW_SE",
                        "ARROW_SW",
                        "ARROW_W",
                        "ASLEEP",
                        "BUTTERFLY",
                        "CHESSBOARD",
                        "CLOCK1",
                        "CLOCK10",
                        "CLOCK11",
                        "CLOCK12",
                        "CLOCK2",
                        "CLOCK3",
                        "CLOCK4",
                        "CLOCK5",
                        "CLOCK6",
                        "CLOCK7",
                        "CLOCK8",
                        "CLOCK9",
                        "CONFUSED",
                        "COW",
                        "DIAMOND",
                        "DIAMOND_SMALL",
                        "DUCK",
                        "FABULOUS",
                        "GHOST",
                        "GIRAFFE",
                        "HAPPY",
                        "HEART",
                        "HEART_SMALL",
                        "HOUSE",
                        "MEH",
                        "MUSIC_CROTCHET",
                        "MUSIC_QUAVER",
                        "MUSIC_QUAVERS",
                        "NO",
                        "PACMAN",
                        "PITCHFORK",
                        "RABBIT",
                        "ROLLERSKATE",
                        "SAD",
                        "SILLY",
                        "SKULL",
                        "SMILE",
                        "SNAKE",
                        "SQUARE",
                        "SQUARE_SMALL",
                        "STICKFIGURE",
                        "SURPRISED",
                        "SWORD",
                        "TARGET",
                        "TORTOISE",
                        "TRIANGLE",
                        "TRIANGLE_LEFT",
                        "TSHIRT",
                        "UMBRELLA",
                        "XMAS",
                        "YES",
                    ]),
                ),
                ("pin0", Members(TOUCH_PIN_MEMBERS)),
                ("pin1", Members(TOUCH_PIN_MEMBERS)),
                ("pin2", Members(TOUCH_PIN_MEMBERS)),
                ("pin3", Members(ANALOG_PIN_MEMBERS)),
                ("pin4", Members(ANALOG_PIN_MEMBERS)),
                ("pin5", Members(DIGITAL_PIN_MEMBERS)),
                ("pin6", Members(DIGITAL_PIN_MEMBERS)),
                ("pin7", Members(DIGITAL_PIN_MEMBERS)),
                ("pin8", Members(DIGITAL_PIN_MEMBERS)),
                ("pin9", Members(DIGITAL_PIN_MEMBERS)),
                ("pin10", Members(ANALOG_PIN_MEMBERS)),
                ("pin11", Members(DIGITAL_PIN_MEMBERS)),
                ("pin12", Members(DIGITAL_PIN_MEMBERS)),
                ("pin13", Members(DIGITAL_PIN_MEMBERS)),
                ("pin14", Members(DIGITAL_PIN_MEMBERS)),
                ("pin15", Members(DIGITAL_PIN_MEMBERS)),
                ("pin16", Members(DIGITAL_PIN_MEMBERS)),
                ("pin19", Members(DIGITAL_PIN_MEMBERS)),
                ("pin20", Members(DIGITAL_PIN_MEMBERS)),
                (
                    "accelerometer",
                    Members(&[
                        "current_gesture",
                        "get_gestures",
                        "get_values",
                        "get_x",
                        "get_y",
                        "get_z",
                        "was_gesture",
                    ]),
                ),
                ("button_a", Members(&["get_presses", "is_pressed", "was_pressed"])),
                ("button_b", Members(&["get_presses", "is_pressed", "was_pressed"])),
                (
                    "compass",
                    Members(&[
                        "calibrate",
                        "clear_calibration",
                        "get_field_strength",
                        "get_x",
                        "get_y",
                        "get_z",
                        "heading",
                        "is_calibrated",
                    ]),
                ),
                (
                    "display",
                    Members(&[
                        "clear",
                        "get_pixel",
                        "is_on",
                        "off",
                        "on",
                        "read_light_level",
                        "scroll",
                        "set_pixel",
                        "show",
                    ]),
                ),
                ("i2c", Members(&["init", "read", "scan", "write"])),
                ("panic", Bare),
                ("reset", Bare),
                ("running_time", Bare),
                ("sleep", Bare),
                ("spi", Members(&["init", "read", "write", "write_readinto"])),
                ("temperature", Bare),
                ("uart", Members(&["any", "init", "read", "readall", "readline", "write"])),
            ]),
        ),
        ("audio", Members(&["play", "AudioFrame"])),
        (
            "machine",
            Members(&[
                "disable_irq",
                "enable_irq",
                "freq",
                "reset",
                "time_pulse_us",
                "unique_id",
            ]),
        ),
        (
            "micropython",
            Members(&[
                "const",
                "heap_lock",
                "heap_unlock",
                "kbd_intr",
                "mem_info",
                "opt_level",
                "qstr_info",
                "stack_use",
            ]),
        ),
        (
            "music",
            Members(&[
                "BADDY",
                "BA_DING",
                "BIRTHDAY",
                "BLUES",
                "CHASE",
                "DADADADUM",
                "ENTERTAINER",
                "FUNERAL",
                "FUNK",
                "JUMP_DOWN",
                "JUMP_UP",
                "NYAN",
                "ODE",
                "POWER_DOWN",
                "POWER_UP",
                "PRELUDE",
                "PUNCHLINE",
                "PYTHON",
                "RINGTONE",
                "WAWAWAWAA",
                "WEDDING",
                "get_tempo",
                "pitch",
                "play",
                "reset",
                "set_temp",
                "stop",
            ]),
        ),
        ("speech", Members(&["pronounce", "say", "sing", "translate"])),
        (
            "radio",
            Members(&[
                "RATE_1MBIT",
                "RATE_250KBIT",
                "RATE_2MBIT",
                "config",
                "off",
                "on",
                "receive",
                "receive_bytes",
                "receive_bytes_into",
                "receive_full",
                "reset",
                "send",
                "send_bytes",
            ]),
        ),
        ("os", Members(&["remove", "listdir", "size", "uname"])),
        ("time", Members(TIME_MEMBERS)),
        ("utime", Members(TIME_MEMBERS)),
        ("ucollections", Members(COLLECTIONS_MEMBERS)),
        ("collections", Members(COLLECTIONS_MEMBERS)),
        ("array", Members(&["array"])),
        (
            "math",
            Members(&[
                "e",
                "pi",
                "sqrt",
                "pow",
                "exp",
                "log",
                "cos",
                "sin",
                "tan",
                "acos",
                "asin",
                "atan",
                "atan2",
                "ceil",
                "copysign",
                "fabs",
                "floor",
                "fmod",
                "frexp",
                "ldexp",
                "modf",
                "isfinite",
                "isinf",
                "isnan",
                "trunc",
                "radians",
                "degrees",
            ]),
        ),
        (
            "random",
            Members(&[
                "getrandbits",
                "seed",
                "randrange",
                "randint",
                "choice",
                "random",
                "uniform",
            ]),
        ),
        ("ustruct", Members(STRUCT_MEMBERS)),
        ("struct", Members(STRUCT_MEMBERS)),
        (
            "sys",
            Members(&[
                "version",
                "version_info",
                "implementation",
                "platform",
                "byteorder",
                "exit",
                "print_exception",
            ]),
        ),
        (
            "gc",
            Members(&[
                "collect",
                "disable",
                "enable",
                "isenabled",
                "mem_free",
                "mem_alloc",
                "threshold",
            ]),
        ),
        (
            "neopixel",
            submodules([("NeoPixel", Members(&["clear", "show"]))]),
        ),
    ])
}

fn extra_modules() -> ApiCatalog {
    ApiCatalog::new([(
        "microbit",
        submodules([
            (
                "microphone",
                Members(&[
                    "LOUD",
                    "QUIET",
                    "current_sound",
                    "get_sounds",
                    "is_sound",
                    "sound_level",
                    "was_sound",
                ]),
            ),
            ("pin_logo", Members(&["is_touched"])),
            (
                "pin_speaker",
                Members(&[
                    "get_analog_period_microseconds",
                    "get_mode",
                    "get_pull",
                    "read_digital",
                    "set_analog_period",
                    "set_analog_period_microseconds",
                    "set_pull",
                    "write_analog",
                    "write_digital",
                ]),
            ),
        ]),
    )])
}
