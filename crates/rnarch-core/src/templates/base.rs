//! Base project file templates.
//!
//! Most of these are fixed content; the app entry, navigator, and store vary
//! with the generator configuration and are built by functions.

use crate::domain::{GeneratorConfig, Routing, StateManagement};

/// `src/App.tsx`: wires providers according to state management and Firebase.
pub fn app_entry(config: &GeneratorConfig) -> String {
    let firebase_import = if config.firebase {
        "import { initializeApp } from '@react-native-firebase/app';\n"
    } else {
        ""
    };
    let firebase_init = if config.firebase {
        "  // Initialize Firebase\n  initializeApp();\n"
    } else {
        ""
    };

    let state_import = match config.state_management {
        StateManagement::Redux => {
            "import { Provider } from 'react-redux';\nimport { store } from './state/store';\n"
        }
        StateManagement::Zustand => "// Zustand stores are used directly via hooks\n",
        StateManagement::Context => "import { AppProvider } from './state/AppContext';\n",
    };

    let body = match config.state_management {
        StateManagement::Redux => {
            r##"    <Provider store={store}>
      <ThemeProvider>
        <StatusBar barStyle="dark-content" />
        <AppNavigator />
      </ThemeProvider>
    </Provider>"##
        }
        StateManagement::Context => {
            r##"    <AppProvider>
      <ThemeProvider>
        <StatusBar barStyle="dark-content" />
        <AppNavigator />
      </ThemeProvider>
    </AppProvider>"##
        }
        StateManagement::Zustand => {
            r##"    <ThemeProvider>
      <StatusBar barStyle="dark-content" />
      <AppNavigator />
    </ThemeProvider>"##
        }
    };

    format!(
        r##"import React, {{ useEffect }} from 'react';
import {{ StatusBar }} from 'react-native';
{firebase_import}import {{ AppNavigator }} from './navigation/AppNavigator';
import {{ ThemeProvider }} from './core/theme/ThemeContext';
{state_import}
const App: React.FC = () => {{
  useEffect(() => {{
{firebase_init}    // App initialization logic
  }}, []);

  return (
{body}
  );
}};

export default App;
"##
    )
}

/// `src/core/api/apiClient.ts`: axios instance with interceptors.
pub const API_CLIENT: &str = r##"import axios from 'axios';
import Config from 'react-native-config';

const apiClient = axios.create({
  baseURL: Config.API_BASE_URL || 'https://api.example.com',
  timeout: 10000,
  headers: {
    'Content-Type': 'application/json',
  },
});

// Request interceptor
apiClient.interceptors.request.use(
  (config) => {
    // Add auth token here if needed
    // const token = await AsyncStorage.getItem('token');
    // if (token) config.headers.Authorization = `Bearer ${token}`;
    return config;
  },
  (error) => Promise.reject(error)
);

// Response interceptor
apiClient.interceptors.response.use(
  (response) => response,
  (error) => {
    // Handle global errors (401, 403, 500, etc.)
    if (error.response) {
      console.error('API Error:', error.response.status, error.response.data);
    }
    return Promise.reject(error);
  }
);

export default apiClient;
"##;

/// `src/core/errors/failures.ts`.
pub const FAILURES: &str = r##"export abstract class Failure {
  readonly message: string;

  constructor(message: string) {
    this.message = message;
  }
}

export class ServerFailure extends Failure {
  constructor(message = 'Server Error') {
    super(message);
  }
}

export class CacheFailure extends Failure {
  constructor(message = 'Cache Error') {
    super(message);
  }
}

export class NetworkFailure extends Failure {
  constructor(message = 'Network Error') {
    super(message);
  }
}

export class GeneralFailure extends Failure {
  constructor(message = 'Unexpected Error') {
    super(message);
  }
}
"##;

/// `src/core/theme/AppTheme.ts`.
pub const THEME: &str = r##"import { StyleSheet } from 'react-native';

export const Colors = {
  primary: '#2196F3',
  primaryDark: '#1976D2',
  primaryLight: '#BBDEFB',
  accent: '#FF4081',
  background: '#FFFFFF',
  surface: '#F5F5F5',
  error: '#F44336',
  textPrimary: '#212121',
  textSecondary: '#757575',
  divider: '#BDBDBD',
  // Dark mode
  darkBackground: '#121212',
  darkSurface: '#1E1E1E',
  darkTextPrimary: '#FFFFFF',
  darkTextSecondary: '#B3B3B3',
};

export const Spacing = {
  xs: 4,
  sm: 8,
  md: 16,
  lg: 24,
  xl: 32,
  xxl: 48,
};

export const FontSizes = {
  caption: 12,
  body: 14,
  subtitle: 16,
  title: 20,
  headline: 24,
  display: 32,
};

export const globalStyles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: Colors.background,
  },
  centerContent: {
    flex: 1,
    justifyContent: 'center',
    alignItems: 'center',
  },
  screenPadding: {
    paddingHorizontal: Spacing.md,
    paddingVertical: Spacing.sm,
  },
});
"##;

/// `src/core/theme/ThemeContext.tsx`: light/dark mode provider.
pub const THEME_CONTEXT: &str = r##"import React, { createContext, useContext, useState, useMemo } from 'react';
import { useColorScheme } from 'react-native';
import { Colors } from './AppTheme';

type ThemeMode = 'light' | 'dark' | 'system';

interface ThemeContextType {
  mode: ThemeMode;
  isDark: boolean;
  colors: typeof Colors;
  toggleTheme: () => void;
}

const ThemeContext = createContext<ThemeContextType | undefined>(undefined);

export const ThemeProvider: React.FC<{ children: React.ReactNode }> = ({ children }) => {
  const systemColorScheme = useColorScheme();
  const [mode, setMode] = useState<ThemeMode>('system');

  const isDark = mode === 'system' ? systemColorScheme === 'dark' : mode === 'dark';

  const colors = useMemo(() => ({
    ...Colors,
    background: isDark ? Colors.darkBackground : Colors.background,
    surface: isDark ? Colors.darkSurface : Colors.surface,
    textPrimary: isDark ? Colors.darkTextPrimary : Colors.textPrimary,
    textSecondary: isDark ? Colors.darkTextSecondary : Colors.textSecondary,
  }), [isDark]);

  const toggleTheme = () => {
    setMode((prev) => (prev === 'light' ? 'dark' : 'light'));
  };

  return (
    <ThemeContext.Provider value={{ mode, isDark, colors, toggleTheme }}>
      {children}
    </ThemeContext.Provider>
  );
};

export const useTheme = (): ThemeContextType => {
  const context = useContext(ThemeContext);
  if (!context) throw new Error('useTheme must be used within ThemeProvider');
  return context;
};
"##;

/// `src/navigation/AppNavigator.tsx`. The React Navigation variant carries
/// the two markers the navigation patcher inserts at; the Expo Router
/// variant is a stub, since routing is file-based there.
pub fn navigator(config: &GeneratorConfig) -> String {
    if config.routing == Routing::ExpoRouter {
        return r##"// Expo Router uses file-based routing.
// Create your routes in the app/ directory.
// See: https://docs.expo.dev/router/introduction/

export {};
"##
        .to_string();
    }

    r##"import React from 'react';
import { NavigationContainer } from '@react-navigation/native';
import { createNativeStackNavigator } from '@react-navigation/native-stack';

// Import screens here

export type RootStackParamList = {
  // Define your route params here
};

const Stack = createNativeStackNavigator<RootStackParamList>();

export const AppNavigator: React.FC = () => {
  return (
    <NavigationContainer>
      <Stack.Navigator
        screenOptions={{
          headerShown: true,
          headerStyle: { backgroundColor: '#2196F3' },
          headerTintColor: '#fff',
          headerTitleStyle: { fontWeight: 'bold' },
        }}
      >
        {/* Add your screens here */}
      </Stack.Navigator>
    </NavigationContainer>
  );
};
"##
    .to_string()
}

/// `src/state/store.ts`, keyed on the state-management choice.
pub fn store(config: &GeneratorConfig) -> String {
    match config.state_management {
        StateManagement::Redux => r##"import { configureStore } from '@reduxjs/toolkit';
import { TypedUseSelectorHook, useDispatch, useSelector } from 'react-redux';

export const store = configureStore({
  reducer: {
    // Add feature reducers here
  },
  middleware: (getDefaultMiddleware) =>
    getDefaultMiddleware({
      serializableCheck: false,
    }),
});

export type RootState = ReturnType<typeof store.getState>;
export type AppDispatch = typeof store.dispatch;

// Typed hooks
export const useAppDispatch: () => AppDispatch = useDispatch;
export const useAppSelector: TypedUseSelectorHook<RootState> = useSelector;
"##
        .to_string(),

        StateManagement::Zustand => r##"// Zustand stores are defined per-feature.
// Each feature creates its own store using zustand's create().
//
// Example:
// import { create } from 'zustand';
//
// interface AuthState {
//   isLoggedIn: boolean;
//   login: () => void;
//   logout: () => void;
// }
//
// export const useAuthStore = create<AuthState>((set) => ({
//   isLoggedIn: false,
//   login: () => set({ isLoggedIn: true }),
//   logout: () => set({ isLoggedIn: false }),
// }));

export {};
"##
        .to_string(),

        StateManagement::Context => r##"import React, { createContext, useContext, useReducer } from 'react';

// Define your global app state here
interface AppState {
  isLoading: boolean;
}

type AppAction =
  | { type: 'SET_LOADING'; payload: boolean };

const initialState: AppState = {
  isLoading: false,
};

const appReducer = (state: AppState, action: AppAction): AppState => {
  switch (action.type) {
    case 'SET_LOADING':
      return { ...state, isLoading: action.payload };
    default:
      return state;
  }
};

interface AppContextType {
  state: AppState;
  dispatch: React.Dispatch<AppAction>;
}

const AppContext = createContext<AppContextType | undefined>(undefined);

export const AppProvider: React.FC<{ children: React.ReactNode }> = ({ children }) => {
  const [state, dispatch] = useReducer(appReducer, initialState);

  return (
    <AppContext.Provider value={{ state, dispatch }}>
      {children}
    </AppContext.Provider>
  );
};

export const useAppContext = (): AppContextType => {
  const context = useContext(AppContext);
  if (!context) throw new Error('useAppContext must be used within AppProvider');
  return context;
};
"##
        .to_string(),
    }
}

/// `src/core/constants/AppConstants.ts`.
pub const CONSTANTS: &str = r##"export const AppConstants = {
  appName: 'React Native App',
  apiVersion: 'v1',
  cacheTimeout: 60 * 60 * 1000, // 1 hour in ms
} as const;
"##;

pub const GITIGNORE: &str = r##"# Environment files
.env*
!.env.example

# Generator config
.rnarch.json

# Dependencies
node_modules/

# React Native
android/app/build/
ios/Pods/
ios/build/
*.hprof

# Metro
.metro-health-check*

# IDE
.idea/
.vscode/
*.iml
*.xcworkspace
*.xcuserdata

# OS
.DS_Store
Thumbs.db

# Testing
coverage/
"##;

pub const ENV_DEVELOPMENT: &str = "API_BASE_URL=https://dev.api.example.com\n";
pub const ENV_PRODUCTION: &str = "API_BASE_URL=https://api.example.com\n";

pub const SAMPLE_TEST: &str = r##"describe('Sample Test', () => {
  it('should pass a basic assertion', () => {
    expect(1 + 1).toBe(2);
  });
});
"##;

/// `src/i18n/i18n.ts`, emitted when localization is enabled.
pub const I18N_CONFIG: &str = r##"import i18n from 'i18next';
import { initReactI18next } from 'react-i18next';
import en from './locales/en.json';

i18n.use(initReactI18next).init({
  compatibilityJSON: 'v3',
  resources: {
    en: { translation: en },
  },
  lng: 'en',
  fallbackLng: 'en',
  interpolation: {
    escapeValue: false,
  },
});

export default i18n;
"##;

pub const LOCALE_EN: &str = r##"{
  "appTitle": "React Native App",
  "welcome": "Welcome",
  "login": "Login",
  "register": "Register",
  "email": "Email",
  "password": "Password"
}
"##;
