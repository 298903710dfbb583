// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{AnyPin, Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use simon_firmware::config::{BUTTON_COUNT, DEBOUNCE_MS, GAME_SPEED_MS};
use simon_firmware::hal::{DebouncedButton, GpioLed, HardwareEntropy};
use simon_firmware::tasks::{button_task, game_task};
use simon_firmware::{
    FirmwareLedButton, Game, GameTiming, LedButton, LedButtonPins, PlayerTurn, validate_pins,
};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Gemeinsamer Zustand des Player-Turns (Game-Task ↔ Button-Tasks)
static PLAYER_TURN: PlayerTurn = PlayerTurn::new();

/// Geräteliste: lebt für die gesamte Laufzeit, nach dem Aufbau unverändert
static LED_BUTTONS: static_cell::StaticCell<[FirmwareLedButton; BUTTON_COUNT]> =
    static_cell::StaticCell::new();

/// Main Entry Point
///
/// Prüft die Konfiguration, baut die LedButtons auf und spawnt
/// Game-Task und Button-Tasks. Danach schläft main() - alle Arbeit läuft
/// in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // LED-Ausgänge und Taster-Eingänge in Slot-Reihenfolge
    let (led_pins, button_pins): (
        [AnyPin<'static>; BUTTON_COUNT],
        [AnyPin<'static>; BUTTON_COUNT],
    ) = simon_firmware::led_button_gpios!(peripherals);

    // Konfigurationsfehler sofort melden, bevor das Spiel startet
    let pins: [LedButtonPins; BUTTON_COUNT] = core::array::from_fn(|slot| {
        LedButtonPins::new(led_pins[slot].number(), button_pins[slot].number())
    });
    if let Err(e) = validate_pins(&pins) {
        defmt::panic!("Ungültige Pin-Konfiguration: {}", e);
    }
    for (slot, pins) in pins.iter().enumerate() {
        info!("Slot {}: {}", slot, pins);
    }

    // Entprellte Taster (Pull-Up, gedrückt = Low)
    let inputs = button_pins.map(|pin| {
        DebouncedButton::new(
            Input::new(pin, InputConfig::default().with_pull(Pull::Up)),
            Duration::from_millis(DEBOUNCE_MS),
        )
    });

    // LEDs (Startwert Low), Slot = Position in der Liste
    let leds =
        led_pins.map(|pin| GpioLed::new(Output::new(pin, Level::Low, OutputConfig::default())));
    let led_buttons: &'static [FirmwareLedButton; BUTTON_COUNT] =
        LED_BUTTONS.init(LedButton::numbered(leds));

    // Spiel aufbauen (Sequenz-Generator wird pro Runde aus dem Hardware-RNG geseedet)
    let game: Game = Game::new(
        led_buttons,
        &PLAYER_TURN,
        HardwareEntropy::new(Rng::new()),
        Delay,
        GameTiming::default().with_speed(GAME_SPEED_MS),
    )
    .expect("Ungültige Spiel-Konfiguration");

    // Ein Button-Task pro LedButton
    for (led_button, input) in led_buttons.iter().zip(inputs) {
        spawner.spawn(button_task(input, led_button)).unwrap();
    }

    // Spiel-Task: läuft für immer
    spawner.spawn(game_task(game)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
